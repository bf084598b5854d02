//! Named controller constants rendered as Verilog wire declarations.
//!
//! The rendering depends on the constant's name only:
//! Names containing an underscore get the parametrized `W-1` width tag
//! and a `_` between the upper and lower halfword of the hex literal.
//! All other names are plain 32 bit words.
//! `voltageCoeff` has 8 fractional bits, everything else 16.

use crate::{fixpt::quantize, params::GenParams, sigfig::format_sig};
use std::fmt;

const SIG_DIGITS: usize = 6;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Constant {
    pub name: &'static str,
    pub value: f64,
}

impl Constant {
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }

    pub fn frac_bits(&self) -> u32 {
        if self.name == "voltageCoeff" { 8 } else { 16 }
    }

    pub fn is_split(&self) -> bool {
        self.name.contains('_')
    }

    pub fn width_tag(&self) -> &'static str {
        if self.is_split() { "W-1" } else { "31" }
    }

    pub fn quantized(&self) -> i32 {
        quantize(self.value, self.frac_bits())
    }

    /// Hex digits of the two's complement word, without the `32'h` prefix.
    pub fn hex_literal(&self) -> String {
        let hex = format!("{:08X}", self.quantized() as u32);
        if self.is_split() {
            format!("{}_{}", &hex[..4], &hex[4..])
        } else {
            hex
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wire signed [{}:0] {} = 32'h{};\t\t// {}",
            self.width_tag(),
            self.name,
            self.hex_literal(),
            format_sig(self.value, SIG_DIGITS)
        )
    }
}

/// All constants in output order.
pub fn constants(params: &GenParams) -> [Constant; 9] {
    let pid = params.pid_coeffs();
    log::debug!("Controller coefficients: {pid:?}");
    [
        Constant::new("K_p1", pid.kp1),
        Constant::new("K_p2", pid.kp2),
        Constant::new("K_i1", pid.ki1),
        Constant::new("K_d1", pid.kd1),
        Constant::new("K_d2", pid.kd2),
        Constant::new("K_d3", pid.kd3),
        Constant::new("tickCoeff", params.tick_coeff()),
        Constant::new("voltageOffset", params.voltage_offset()),
        Constant::new("voltageCoeff", params.voltage_coeff()),
    ]
}


// vim: ts=4 sw=4 expandtab

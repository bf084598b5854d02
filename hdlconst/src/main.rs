// -*- coding: utf-8 -*-

#![forbid(unsafe_code)]

use anyhow::{self as ah, Context as _};
use clap::Parser;
use ctrlcoeff::{GenParams, constants};
use std::io::{self, Write};

/// Print the speed controller constants as Verilog wire declarations.
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {}

fn write_table(out: &mut impl Write, params: &GenParams) -> ah::Result<()> {
    log::debug!("{params:?}, Ts = {}", params.ts());
    for c in constants(params) {
        log::debug!("{} = {} -> Q{} {:#010X}", c.name, c.value, c.frac_bits(), c.quantized());
        writeln!(out, "{c}").context("Write constant")?;
    }
    out.flush().context("Flush stdout")
}

fn main() -> ah::Result<()> {
    let _opts = Opts::parse();
    env_logger::init();
    write_table(&mut io::stdout().lock(), &GenParams::DEFAULT)
}


// vim: ts=4 sw=4 expandtab

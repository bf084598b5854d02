use crate::pid::PidCoeffs;

/// Parameter set of the speed controller the HDL constants are built for.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GenParams {
    /// Sampling frequency in Hz.
    pub fs: f64,
    /// System clock frequency in Hz.
    pub fclk: f64,
    /// Encoder ticks per revolution.
    pub nt: f64,
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    /// Proportional setpoint weight.
    pub b: f64,
    /// Derivative setpoint weight.
    pub c: f64,
    /// Derivative filter coefficient.
    pub nfilt: f64,
    /// Output saturation voltage, applied symmetrically.
    pub vsat: f64,
}

impl GenParams {
    pub const DEFAULT: Self = Self {
        fs: 50.0,
        fclk: 50e6,
        nt: 5462.22,
        kp: 0.0165,
        ki: 1.6452,
        kd: 0.0,
        b: 1.0,
        c: 1.0,
        nfilt: 100.0,
        vsat: 12.0,
    };

    /// Sampling period in seconds.
    pub fn ts(&self) -> f64 {
        1.0 / self.fs
    }

    pub fn pid_coeffs(&self) -> PidCoeffs<f64> {
        let ts = self.ts();
        let den = 1.0 + self.nfilt * ts;
        PidCoeffs {
            kp1: self.kp * self.b,
            kp2: self.kp,
            ki1: self.ki * ts,
            kd1: self.kd * self.nfilt * self.c / den,
            kd2: self.kd * self.nfilt / den,
            kd3: 1.0 / den,
            out_min: -self.vsat,
            out_max: self.vsat,
        }
    }

    /// Encoder tick count per sample period to RPM.
    pub fn tick_coeff(&self) -> f64 {
        60.0 * self.fs / self.nt
    }

    pub fn voltage_offset(&self) -> f64 {
        3.0 * self.vsat
    }

    pub fn voltage_coeff(&self) -> f64 {
        0.0005 * self.fclk / self.vsat
    }
}

impl Default for GenParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}


// vim: ts=4 sw=4 expandtab

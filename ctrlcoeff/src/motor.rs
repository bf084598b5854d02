//! First order DC motor plant for closed loop checks of the controller.

use crate::{fixpt::Fixpt, pid::Sample};

/// Voltage to angular velocity transfer function `K / (tau·s + 1)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MotorParams {
    /// Steady state speed per volt.
    pub dc_gain: f64,
    /// Mechanical time constant in seconds.
    pub time_constant: f64,
}

impl MotorParams {
    pub const DEFAULT: Self = Self {
        dc_gain: 23.8095238095,
        time_constant: 0.2293332714,
    };

    /// Input coefficient for sample time `ts`.
    pub fn coeff_v(&self, ts: f64) -> f64 {
        ts * self.dc_gain / (ts + self.time_constant)
    }

    /// State coefficient for sample time `ts`.
    pub fn coeff_w(&self, ts: f64) -> f64 {
        self.time_constant / (ts + self.time_constant)
    }
}

impl Default for MotorParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Backward Euler discretization: `w[k] = cv·v[k] + cw·w[k-1]`.
#[derive(Clone, Debug)]
pub struct Motor<T> {
    coeff_v: T,
    coeff_w: T,
    w: T,
}

impl Motor<f64> {
    pub fn new(params: &MotorParams, ts: f64) -> Self {
        Self {
            coeff_v: params.coeff_v(ts),
            coeff_w: params.coeff_w(ts),
            w: 0.0,
        }
    }

    pub fn quantize<const FRAC: u32>(&self) -> Motor<Fixpt<FRAC>> {
        Motor {
            coeff_v: Fixpt::<FRAC>::from_f64(self.coeff_v),
            coeff_w: Fixpt::<FRAC>::from_f64(self.coeff_w),
            w: Fixpt::<FRAC>::from_f64(self.w),
        }
    }
}

impl<T: Sample> Motor<T> {
    pub fn velocity(&self) -> T {
        self.w
    }

    pub fn run(&mut self, voltage: T) -> T {
        self.w = self.coeff_v * voltage + self.coeff_w * self.w;
        self.w
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        fixpt::Q16,
        params::GenParams,
        pid::{Pid, PidCoeffs},
    };

    const STEPS: usize = 200;
    const SETPOINT: f64 = 100.0;

    #[test]
    fn test_open_loop() {
        let ts = GenParams::DEFAULT.ts();
        let mut motor = Motor::new(&MotorParams::default(), ts);
        let w1 = motor.run(1.0);
        assert!((w1 - MotorParams::DEFAULT.coeff_v(ts)).abs() < 1e-12);

        for _ in 0..1000 {
            motor.run(1.0);
        }
        assert!((motor.velocity() - MotorParams::DEFAULT.dc_gain).abs() < 1e-6);
    }

    /// Feedback is sampled before the controller runs, one step of plant lag.
    fn closed_loop<T: Sample>(
        params: &PidCoeffs<T>,
        motor: &mut Motor<T>,
        sp: T,
    ) -> Vec<(T, T)> {
        let mut pid = Pid::new();
        let mut u = T::zero();
        (0..STEPS)
            .map(|_| {
                let w = motor.run(u);
                u = pid.run(params, sp, w);
                (w, u)
            })
            .collect()
    }

    #[test]
    fn test_closed_loop() {
        let gen_params = GenParams::DEFAULT;
        let params = gen_params.pid_coeffs();
        let mut motor = Motor::new(&MotorParams::DEFAULT, gen_params.ts());
        let trace = closed_loop(&params, &mut motor, SETPOINT);

        assert!(trace.iter().all(|&(_, u)| (-12.0..=12.0).contains(&u)));
        assert!(trace.iter().any(|&(_, u)| u == 12.0));
        let (w, u) = trace[STEPS - 1];
        assert!((w - SETPOINT).abs() < 0.1, "{w}");
        assert!((u - SETPOINT / MotorParams::DEFAULT.dc_gain).abs() < 0.05, "{u}");
    }

    #[test]
    fn test_closed_loop_fixpt() {
        let gen_params = GenParams::DEFAULT;
        let params = gen_params.pid_coeffs();
        let motor = Motor::new(&MotorParams::DEFAULT, gen_params.ts());

        let trace = closed_loop(&params, &mut motor.clone(), SETPOINT);
        let qtrace = closed_loop(
            &params.quantize::<16>(),
            &mut motor.quantize::<16>(),
            Q16::from_f64(SETPOINT),
        );

        let qmax = Q16::from_int(12);
        for (&(w, _), &(qw, qu)) in trace.iter().zip(&qtrace) {
            assert!((qw.to_f64() - w).abs() < 0.05, "{w} {}", qw.to_f64());
            assert!(qu <= qmax && qu >= -qmax);
        }
        assert!((qtrace[STEPS - 1].0.to_f64() - SETPOINT).abs() < 0.1);
    }
}

// vim: ts=4 sw=4 expandtab

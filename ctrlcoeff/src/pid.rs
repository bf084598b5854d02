use crate::fixpt::Fixpt;
use core::ops::{Add, Mul, Sub};

/// Parallel form gains.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ParallelGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

/// Time constant form gains.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct StandardGains {
    pub kp: f64,
    pub ti: f64,
    pub td: f64,
}

/// Discrete velocity form coefficients.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct VelocityCoeffs {
    pub q0: f64,
    pub q1: f64,
    pub q2: f64,
}

impl ParallelGains {
    /// Zero gains divide through to inf or NaN.
    pub fn to_standard(&self) -> StandardGains {
        StandardGains {
            kp: self.kp,
            ti: self.kp / self.ki,
            td: self.kd / self.kp,
        }
    }
}

impl StandardGains {
    /// Coefficients for sample time `ts` in seconds.
    pub fn velocity_coeffs(&self, ts: f64) -> VelocityCoeffs {
        let Self { kp, ti, td } = *self;
        VelocityCoeffs {
            q0: kp * (1.0 + td / ts),
            q1: -kp * (1.0 - ts / ti + 2.0 * td / ts),
            q2: kp * td / ts,
        }
    }
}

pub trait Sample:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    fn zero() -> Self;
}

impl Sample for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl<const FRAC: u32> Sample for Fixpt<FRAC> {
    fn zero() -> Self {
        Fixpt::<FRAC>::zero()
    }
}

/// Coefficients of the two degree of freedom PID with filtered derivative.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PidCoeffs<T> {
    /// Proportional gain on the setpoint (setpoint weight b applied).
    pub kp1: T,
    /// Proportional gain on the feedback.
    pub kp2: T,
    /// Integral gain times sample time.
    pub ki1: T,
    /// Derivative gain on the setpoint (setpoint weight c applied).
    pub kd1: T,
    /// Derivative gain on the feedback.
    pub kd2: T,
    /// Derivative filter pole.
    pub kd3: T,
    pub out_min: T,
    pub out_max: T,
}

impl<T: Copy> PidCoeffs<T> {
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> PidCoeffs<U> {
        PidCoeffs {
            kp1: f(self.kp1),
            kp2: f(self.kp2),
            ki1: f(self.ki1),
            kd1: f(self.kd1),
            kd2: f(self.kd2),
            kd3: f(self.kd3),
            out_min: f(self.out_min),
            out_max: f(self.out_max),
        }
    }
}

impl PidCoeffs<f64> {
    pub fn quantize<const FRAC: u32>(&self) -> PidCoeffs<Fixpt<FRAC>> {
        self.map(Fixpt::<FRAC>::from_f64)
    }
}

#[derive(Clone, Debug)]
pub struct Pid<T> {
    i: T,
    d: T,
    prev_x: T,
}

impl<T: Sample> Pid<T> {
    pub fn new() -> Self {
        Self {
            i: T::zero(),
            d: T::zero(),
            prev_x: T::zero(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn run(&mut self, params: &PidCoeffs<T>, sp: T, r: T) -> T {
        // P term
        let p = params.kp1 * sp - params.kp2 * r;

        // I term
        let i = self.i + params.ki1 * (sp - r);
        self.i = i;

        // D term, first order filtered
        let x = params.kd1 * sp - params.kd2 * r;
        let d = params.kd3 * self.d + (x - self.prev_x);
        self.d = d;
        self.prev_x = x;

        let u = p + i + d;
        if u < params.out_min {
            params.out_min
        } else if u > params.out_max {
            params.out_max
        } else {
            u
        }
    }
}

impl<T: Sample> Default for Pid<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Velocity form PID. Accumulates output increments.
#[derive(Clone, Default, Debug)]
pub struct IncrementalPid {
    u: f64,
    e1: f64,
    e2: f64,
}

impl IncrementalPid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn run(&mut self, q: &VelocityCoeffs, sp: f64, r: f64) -> f64 {
        let e = sp - r;
        self.u += q.q0 * e + q.q1 * self.e1 + q.q2 * self.e2;
        self.e2 = self.e1;
        self.e1 = e;
        self.u
    }
}


// vim: ts=4 sw=4 expandtab

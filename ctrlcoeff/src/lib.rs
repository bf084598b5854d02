//! PID coefficient conversion and fixed point constant generation.

#![forbid(unsafe_code)]

pub mod fixpt;
pub mod motor;
pub mod params;
pub mod pid;
pub mod sigfig;
pub mod table;

pub use crate::{
    fixpt::{Fixpt, Q8, Q16, dequantize, quantize},
    motor::{Motor, MotorParams},
    params::GenParams,
    pid::{
        IncrementalPid, ParallelGains, Pid, PidCoeffs, Sample, StandardGains, VelocityCoeffs,
    },
    sigfig::{format_fixed, format_sig},
    table::{Constant, constants},
};

// vim: ts=4 sw=4 expandtab

// -*- coding: utf-8 -*-

#![forbid(unsafe_code)]

mod args;

use crate::args::Opts;
use anyhow::{self as ah, Context as _};
use ctrlcoeff::{ParallelGains, format_fixed};
use std::{
    ffi::OsString,
    io::{self, Write},
};

const USAGE: &str = "Usage:\tpidconv [Sample Time] [Kp] [Ki] [Kd]\nNote: Sample time is in seconds";

fn f6(v: f64) -> String {
    format_fixed(v, 6)
}

fn write_forms(out: &mut impl Write, ts: f64, gains: &ParallelGains) -> io::Result<()> {
    let std_form = gains.to_standard();
    let q = std_form.velocity_coeffs(ts);
    log::debug!("Ts = {ts}, {gains:?} -> {std_form:?}, {q:?}");

    writeln!(
        out,
        "Kp = {}\tKi = {}\tKd = {}",
        f6(gains.kp),
        f6(gains.ki),
        f6(gains.kd)
    )?;
    writeln!(
        out,
        "Kp = {}\tTi = {}\tTd = {}",
        f6(std_form.kp),
        f6(std_form.ti),
        f6(std_form.td)
    )?;
    writeln!(out, "q0 = {}\tq1 = {}\tq2 = {}", f6(q.q0), f6(q.q1), f6(q.q2))
}

fn run<I, T>(out: &mut impl Write, args: I) -> ah::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Opts::parse_args(args) {
        Ok(opts) => {
            let gains = ParallelGains {
                kp: opts.kp,
                ki: opts.ki,
                kd: opts.kd,
            };
            write_forms(out, opts.ts, &gains).context("Write parameter forms")?;
        }
        Err(e) => {
            log::warn!("{e}");
            writeln!(out, "Invalid Input").context("Write usage")?;
            writeln!(out, "{USAGE}").context("Write usage")?;
        }
    }
    out.flush().context("Flush stdout")
}

fn main() -> ah::Result<()> {
    env_logger::init();
    run(&mut io::stdout().lock(), std::env::args_os())
}


// vim: ts=4 sw=4 expandtab

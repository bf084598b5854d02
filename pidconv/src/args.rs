// -*- coding: utf-8 -*-

use clap::{
    Parser,
    error::{ContextKind, ContextValue, ErrorKind},
};
use std::ffi::OsString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidInputError {
    #[error("Expected exactly four arguments")]
    ArgCount,
    #[error("Not a number: '{0}'")]
    NotANumber(String),
}

const ARG_COUNT: usize = 4;

/// Positional floats. Help and version flags are disabled,
/// so every malformed command line ends up as `InvalidInputError`.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Opts {
    /// Sample time in seconds.
    #[arg(allow_hyphen_values = true, value_parser = parse_float)]
    pub ts: f64,

    #[arg(allow_hyphen_values = true, value_parser = parse_float)]
    pub kp: f64,

    #[arg(allow_hyphen_values = true, value_parser = parse_float)]
    pub ki: f64,

    #[arg(allow_hyphen_values = true, value_parser = parse_float)]
    pub kd: f64,
}

/// Accepts `_` digit separators, but only between two digits.
fn parse_float(s: &str) -> Result<f64, std::num::ParseFloatError> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let digits: String = s
        .char_indices()
        .filter(|&(i, c)| {
            c != '_'
                || i == 0
                || !bytes[i - 1].is_ascii_digit()
                || !bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        })
        .map(|(_, c)| c)
        .collect();
    digits.parse()
}

impl Opts {
    /// Parse a full command line including the program name.
    pub fn parse_args<I, T>(args: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        // Count before clap, which swallows a `--` separator.
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != ARG_COUNT + 1 {
            return Err(InvalidInputError::ArgCount);
        }
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => {
                let value = match e.get(ContextKind::InvalidValue) {
                    Some(ContextValue::String(v)) => v.clone(),
                    _ => String::new(),
                };
                InvalidInputError::NotANumber(value)
            }
            _ => InvalidInputError::ArgCount,
        })
    }
}


// vim: ts=4 sw=4 expandtab

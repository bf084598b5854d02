//! Decimal rendering with a fixed number of significant digits.

/// Format `value` with `digits` significant digits in general notation.
///
/// Trailing zeros are dropped, fixed notation always keeps at least one
/// fractional digit, and scientific notation (`1.5e-05`, `1.23457e+05`)
/// is used when the decimal exponent is below -4 or at least `digits - 1`.
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let digits = digits.max(1);

    // Rounding to `digits` first decides the exponent.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 - 1 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        let fixed = format!("{value:.decimals$}");
        let fixed = strip_zeros(&fixed);
        if fixed.contains('.') {
            fixed.to_string()
        } else {
            format!("{fixed}.0")
        }
    }
}

/// Format `value` with exactly `decimals` fractional digits.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}


// vim: ts=4 sw=4 expandtab

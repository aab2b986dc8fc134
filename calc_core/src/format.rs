//! # Display Formatting
//!
//! Every calculator returns decimal strings ready for display. This module
//! owns the one rounding rule they all share, plus the input parsing the
//! caller applies before invoking a calculator.
//!
//! ## Rounding
//!
//! Values are rounded half away from zero on their shortest round-trip decimal
//! representation, so a value that reads as a tie is treated as one:
//!
//! ```rust
//! use calc_core::format::format_fixed;
//!
//! assert_eq!(format_fixed(0.15, 1), "0.2");
//! assert_eq!(format_fixed(2.5, 0), "3");
//! assert_eq!(format_fixed(37.527767497325675, 1), "37.5");
//! ```
//!
//! ## Non-finite values
//!
//! Formatting never fails. `NaN` and the infinities render as fixed sentinels
//! ([`NAN_SENTINEL`], [`POSITIVE_INFINITY_SENTINEL`],
//! [`NEGATIVE_INFINITY_SENTINEL`]), whichever calculator produced them.

/// Rendered in place of `NaN`
pub const NAN_SENTINEL: &str = "NaN";

/// Rendered in place of `+∞` (e.g. source reactance at zero fault power)
pub const POSITIVE_INFINITY_SENTINEL: &str = "Infinity";

/// Rendered in place of `-∞`
pub const NEGATIVE_INFINITY_SENTINEL: &str = "-Infinity";

/// Format `value` with exactly `decimals` digits after the decimal point.
///
/// # Example
///
/// ```rust
/// use calc_core::format::format_fixed;
///
/// assert_eq!(format_fixed(75.05553499465135, 0), "75");
/// assert_eq!(format_fixed(0.125, 2), "0.13");
/// assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return NAN_SENTINEL.to_string();
    }
    if value.is_infinite() {
        let sentinel = if value > 0.0 {
            POSITIVE_INFINITY_SENTINEL
        } else {
            NEGATIVE_INFINITY_SENTINEL
        };
        return sentinel.to_string();
    }

    let (digits, point) = shortest_digits(value.abs());

    // Digits that survive the cut, counted from the first significant digit
    let keep = point + decimals as i64;
    let mut kept: Vec<u8> = if keep > 0 {
        let mut v: Vec<u8> = digits.iter().copied().take(keep as usize).collect();
        v.resize(keep as usize, 0);
        v
    } else {
        Vec::new()
    };

    let round_digit = if keep >= 0 {
        digits.get(keep as usize).copied().unwrap_or(0)
    } else {
        0
    };
    if round_digit >= 5 {
        increment(&mut kept);
    }

    if kept.len() < decimals + 1 {
        let mut padded = vec![0; decimals + 1 - kept.len()];
        padded.extend(kept);
        kept = padded;
    }

    let split = kept.len() - decimals;
    let is_zero = kept.iter().all(|d| *d == 0);

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Parse a user-entered number, substituting `0.0` for anything that is not
/// a finite number.
///
/// ```rust
/// use calc_core::format::parse_or_zero;
///
/// assert_eq!(parse_or_zero(" 2.5 "), 2.5);
/// assert_eq!(parse_or_zero("abc"), 0.0);
/// assert_eq!(parse_or_zero(""), 0.0);
/// ```
pub fn parse_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a string produced by [`format_fixed`] back into a number.
///
/// Sentinels map back to their non-finite values.
pub fn parse_formatted(text: &str) -> f64 {
    match text {
        NAN_SENTINEL => f64::NAN,
        POSITIVE_INFINITY_SENTINEL => f64::INFINITY,
        NEGATIVE_INFINITY_SENTINEL => f64::NEG_INFINITY,
        other => other.trim().parse().unwrap_or(f64::NAN),
    }
}

/// Decimal digits of a non-negative finite value and the position of the
/// decimal point relative to the first digit.
///
/// `{:e}` yields the shortest representation that round-trips, e.g. `3.75e1`
/// for 37.5, giving digits `[3, 7, 5]` and point `2`.
fn shortest_digits(value: f64) -> (Vec<u8>, i64) {
    let repr = format!("{:e}", value);
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent + 1)
}

fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

//! Number formatting for display.
//!
//! Results are shown as the shortest decimal that reads back to the same
//! double. Rounding for display goes through the exact decimal expansion
//! of the value, so `1.03125` rounds to `1.0313` rather than being at the
//! mercy of an intermediate multiplication.

/// Enough fractional digits to spell out any double exactly.
const EXACT_DIGITS: usize = 1074;

/// Magnitude from which numbers are written in exponent form.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which numbers are written in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Round `value` to `digits` decimal places.
///
/// Halfway cases round away from zero. Values that are not finite, or too
/// large to have a fractional part worth rounding, come back unchanged.
pub fn to_fixed(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value.abs() >= EXPONENT_UPPER {
        return value;
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        increment(&mut kept);
    }

    let split = kept.len() - digits;
    let mut rounded = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() {
        rounded.push('-');
    }
    rounded.push_str(&String::from_utf8_lossy(&kept[..split]));
    if digits > 0 {
        rounded.push('.');
        rounded.push_str(&String::from_utf8_lossy(&kept[split..]));
    }

    rounded.parse().unwrap_or(value)
}

/// Add one to the last digit of an ASCII digit string, carrying leftwards.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Format a number for display.
///
/// Integers print without a fractional part, negative zero prints as `0`,
/// and very large or very small magnitudes switch to exponent form with an
/// explicit exponent sign (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}

/// Check whether a finite value has no fractional part.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

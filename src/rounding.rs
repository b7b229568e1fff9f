//! Presentation rounding rules and multiplier parsing.
//!
//! All helpers work on [`Decimal`] so that products such as `100 * 1.10` stay exact and a
//! ceiling never jumps a step because of binary floating-point noise.

use rust_decimal::{Decimal, RoundingStrategy};

const MAX_SCALE: u32 = 28;

/// Smallest multiple of ten that is not less than `value`.
pub fn round_to_nearest_10(value: Decimal) -> Decimal {
    ((value / Decimal::TEN).ceil() * Decimal::TEN).normalize()
}

/// Ceiling at two significant digits, used for "round up" display values.
///
/// Values below ten are ceiled to the next integer. Otherwise the value is ceiled to a
/// multiple of `10^(floor(log10 value) - 1)`, so `1234` becomes `1300` and `110` stays `110`.
/// The result is never below the input.
pub fn round_up_two_significant(value: Decimal) -> Decimal {
    if value < Decimal::TEN {
        return value.ceil().normalize();
    }

    let scale = pow10(magnitude(value) - 1);
    ((value / scale).ceil() * scale).normalize()
}

/// Rounds to the nearest multiple of `10^(floor(log10 |value|) - 1)`, keeping two
/// significant digits. Midpoints round away from zero; zero maps to zero.
pub fn round_to_significant_digits(value: Decimal) -> Decimal {
    if value.is_zero() {
        return Decimal::ZERO;
    }

    let scale = pow10(magnitude(value) - 1);
    ((value / scale).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * scale)
        .normalize()
}

/// Parses a multiplier attribute the lenient way page markup expects.
///
/// The longest leading decimal literal wins (`"2.5x"` is `2.5`, `" 3"` is `3`). Missing,
/// unparsable, and zero multipliers all fall back to `1`. A literal that is a number but
/// cannot be held by [`Decimal`] (`"1e30"`) yields `None`.
pub fn parse_multiplier(raw: Option<&str>) -> Option<Decimal> {
    match raw.map_or(Literal::Missing, leading_decimal) {
        Literal::Value(m) if !m.is_zero() => Some(m),
        Literal::OutOfRange => None,
        Literal::Value(_) | Literal::Missing => Some(Decimal::ONE),
    }
}

enum Literal {
    Missing,
    Value(Decimal),
    OutOfRange,
}

/// `floor(log10(|value|))` for a non-zero value; `0` for zero.
pub(crate) fn magnitude(value: Decimal) -> i32 {
    if value.is_zero() {
        return 0;
    }

    let mut v = value.abs();
    let mut exp = 0;
    while v >= Decimal::TEN {
        v /= Decimal::TEN;
        exp += 1;
    }
    while v < Decimal::ONE {
        v *= Decimal::TEN;
        exp -= 1;
    }
    exp
}

/// `10^exp`, clamped to the smallest positive power `Decimal` can hold.
pub(crate) fn pow10(exp: i32) -> Decimal {
    if exp >= 0 {
        (0..exp).fold(Decimal::ONE, |acc, _| acc * Decimal::TEN)
    } else {
        let scale = exp.unsigned_abs().min(MAX_SCALE);
        Decimal::new(1, scale)
    }
}

fn leading_decimal(raw: &str) -> Literal {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return Literal::Missing;
    }

    // exponent only counts when at least one digit follows it
    let mut exp_end = end;
    if exp_end < bytes.len() && matches!(bytes[exp_end], b'e' | b'E') {
        exp_end += 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    let literal = s[..end].strip_prefix('+').unwrap_or(&s[..end]);
    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => unsigned.split_at(at),
        None => (unsigned, ""),
    };
    let mantissa = mantissa.trim_end_matches('.');
    let lead = if mantissa.starts_with('.') { "0" } else { "" };
    let literal = format!("{sign}{lead}{mantissa}{exponent}");

    let parsed = if exponent.is_empty() {
        literal.parse::<Decimal>()
    } else {
        Decimal::from_scientific(&literal)
    };
    parsed.map_or(Literal::OutOfRange, Literal::Value)
}

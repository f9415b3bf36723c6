// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric literal minimization (§4.5.5).

use ryu_js::Buffer;

/// Shortest-round-trip decimal via `ryu_js` (the float-to-string crate
/// already reached for in this stack's dependency graph because it formats
/// doubles the way JS engines do), then exponent/hex shortening.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let mut buf = Buffer::new();
    let shortest = buf.format_finite(value);
    shorten(shortest, value)
}

/// Like [`format_number`], but substitutes the host's `NaN`/`Infinity`
/// bindings with a safe fallback expression when those globals are not
/// guaranteed to exist (§4.5.5).
pub(crate) fn format_number_with_fallback(value: f64, nan_and_infinity_available: bool) -> String {
    if value.is_nan() && !nan_and_infinity_available {
        return "(+'x')".to_string();
    }
    if value.is_infinite() && !nan_and_infinity_available {
        return if value.is_sign_positive() { "(1/0)".to_string() } else { "(1/-0)".to_string() };
    }
    format_number(value)
}

fn shorten(decimal: &str, value: f64) -> String {
    let (mantissa, exponent) = split_exponent(decimal);
    let digits = mantissa.trim_start_matches('-').replace('.', "");
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let negative = mantissa.starts_with('-');
    let point = decimal_point_position(mantissa) + exponent;

    let mut candidates = vec![decimal.to_string()];

    if point >= digits.len() as i32 && point <= 21 {
        let zeros = point - digits.len() as i32;
        if zeros >= 0 {
            let mut s = String::new();
            if negative {
                s.push('-');
            }
            s.push_str(digits);
            for _ in 0..zeros {
                s.push('0');
            }
            candidates.push(s);
        }
    } else if point > 0 && (point as usize) < digits.len() {
        let mut s = String::new();
        if negative {
            s.push('-');
        }
        s.push_str(&digits[..point as usize]);
        s.push('.');
        s.push_str(&digits[point as usize..]);
        candidates.push(s);
    } else if point <= 0 && point > -6 {
        let mut s = String::new();
        if negative {
            s.push('-');
        }
        s.push_str("0.");
        for _ in 0..(-point) {
            s.push('0');
        }
        s.push_str(digits);
        candidates.push(s);
    }

    if digits.len() > 1 || point > 21 || point < -5 {
        let exp = point - 1;
        let mut s = String::new();
        if negative {
            s.push('-');
        }
        s.push_str(&digits[..1]);
        if digits.len() > 1 {
            s.push('.');
            s.push_str(&digits[1..]);
        }
        s.push('e');
        if exp >= 0 {
            s.push('+');
        }
        s.push_str(&exp.to_string());
        candidates.push(s);
    }

    if value.fract() == 0.0 && value.abs() < 1e21 {
        let as_int = value as i64;
        if as_int as f64 == value {
            let hex = if as_int < 0 {
                format!("-0x{:x}", -as_int)
            } else {
                format!("0x{:x}", as_int)
            };
            candidates.push(hex);
        }
    }

    candidates.into_iter().min_by_key(|s| s.len()).unwrap_or_else(|| decimal.to_string())
}

fn split_exponent(s: &str) -> (&str, i32) {
    if let Some(idx) = s.find(['e', 'E']) {
        let exp: i32 = s[idx + 1..].parse().unwrap_or(0);
        (&s[..idx], exp)
    } else {
        (s, 0)
    }
}

fn decimal_point_position(mantissa: &str) -> i32 {
    let mantissa = mantissa.trim_start_matches('-');
    if let Some(dot) = mantissa.find('.') {
        let int_part = &mantissa[..dot];
        let int_digits = int_part.trim_start_matches('0');
        if int_digits.is_empty() {
            let frac = &mantissa[dot + 1..];
            let leading_zeros = frac.len() - frac.trim_start_matches('0').len();
            -(leading_zeros as i32)
        } else {
            int_digits.len() as i32
        }
    } else {
        mantissa.trim_start_matches('0').len().max(0) as i32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integers_format_plainly() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn trailing_zeros_use_exponent_form_when_shorter() {
        assert_eq!(format_number(100000.0), "1e5");
        assert_eq!(format_number(1000.0), "1000");
    }

    #[test]
    fn nan_and_infinity_fall_back_when_globals_are_unsafe() {
        assert_eq!(format_number_with_fallback(f64::NAN, false), "(+'x')");
        assert_eq!(format_number_with_fallback(f64::INFINITY, false), "(1/0)");
        assert_eq!(format_number_with_fallback(f64::NAN, true), "NaN");
    }
}

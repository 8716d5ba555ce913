//! Precision correction for the `decimal` input type.
//!
//! The browser's native `type="number"` input accepts arbitrary fractional
//! digits; on blur the field snaps the value to the precision configured in
//! the editor (`"0.01"` keeps two). Values typed without a decimal point
//! pass through untouched.

use crate::config::Precision;
use crate::mask::parse_float_prefix;

/// Round free-typed decimal text to the configured precision.
///
/// Accepts `,` as a typed decimal point. Returns `None` for empty or
/// non-numeric text.
pub fn correct_decimal(raw: &str, precision: Precision) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    let value = parse_float_prefix(&normalized)?;
    if !normalized.contains('.') {
        return Some(value);
    }
    Some(round_to(value, precision.decimals()))
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let mut factor = 1.0_f64;
    for _ in 0..decimals {
        factor *= 10.0;
    }
    (value * factor).round() / factor
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(correct_decimal("5.678", Precision::new(2)), Some(5.68));
        assert_eq!(correct_decimal("5.6789", Precision::new(1)), Some(5.7));
        assert_eq!(correct_decimal("12.346", Precision::new(2)), Some(12.35));
    }

    #[test]
    fn test_integer_text_passes_through() {
        assert_eq!(correct_decimal("5", Precision::new(2)), Some(5.0));
        assert_eq!(correct_decimal("1200", Precision::new(1)), Some(1200.0));
    }

    #[test]
    fn test_comma_as_decimal_point() {
        assert_eq!(correct_decimal("0,5", Precision::new(1)), Some(0.5));
        assert_eq!(correct_decimal("3,14159", Precision::new(2)), Some(3.14));
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(correct_decimal("", Precision::new(2)), None);
        assert_eq!(correct_decimal("   ", Precision::new(2)), None);
        assert_eq!(correct_decimal("abc", Precision::new(2)), None);
    }

    #[test]
    fn test_negative() {
        assert_eq!(correct_decimal("-2.556", Precision::new(2)), Some(-2.56));
    }
}

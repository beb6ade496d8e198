//! Number validation, conversion and formatting helpers.
//!
//! Invalid input is reported with `false` or `None`, never an error.

use crate::calculator::Number;

/// Decimal places used by [`format_number`] callers that have no preference.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Check if the text is a valid floating-point literal.
///
/// The text is taken as is: surrounding whitespace makes it invalid.
/// Accepts a leading sign, `.5`, `5.` and exponent notation.
pub fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

/// Format a number for display.
///
/// Integers are printed as they are. Floats are rounded to
/// `decimal_places` digits, then trailing zeros and a dangling decimal
/// point are stripped (`123.10` becomes `"123.1"`, `123.00` becomes `"123"`).
pub fn format_number(num: impl Into<Number>, decimal_places: usize) -> String {
    match num.into() {
        Number::Int(i) => i.to_string(),
        Number::Float(f) => {
            let formatted = format!("{:.*}", decimal_places, f);
            if formatted.contains('.') {
                formatted
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            } else {
                formatted
            }
        }
    }
}

/// Validate user input and convert it to a float.
///
/// Returns `None` for empty, whitespace-only or non-numeric text.
/// Integral input still comes back as a float.
pub fn validate_input(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if !is_number(trimmed) {
        tracing::trace!("Rejected input {:?}", value);
        return None;
    }

    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number_valid() {
        assert!(is_number("123"));
        assert!(is_number("123.45"));
        assert!(is_number("-123"));
        assert!(is_number("-123.45"));
        assert!(is_number("+7"));
        assert!(is_number("0"));
        assert!(is_number("0.0"));
        assert!(is_number(".5"));
        assert!(is_number("5."));
        assert!(is_number("1e3"));
    }

    #[test]
    fn test_is_number_invalid() {
        assert!(!is_number("abc"));
        assert!(!is_number("12a"));
        assert!(!is_number(""));
        assert!(!is_number("."));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("1+2"));
        assert!(!is_number("-"));
        assert!(!is_number(" 5"));
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(123, DEFAULT_DECIMAL_PLACES), "123");
        assert_eq!(format_number(0, DEFAULT_DECIMAL_PLACES), "0");
        assert_eq!(format_number(-123, DEFAULT_DECIMAL_PLACES), "-123");
        assert_eq!(format_number(1_000_000, 0), "1000000");
    }

    #[test]
    fn test_format_floats() {
        assert_eq!(format_number(123.45, DEFAULT_DECIMAL_PLACES), "123.45");
        assert_eq!(format_number(123.00, DEFAULT_DECIMAL_PLACES), "123");
        assert_eq!(format_number(123.10, DEFAULT_DECIMAL_PLACES), "123.1");
        assert_eq!(format_number(0.5, DEFAULT_DECIMAL_PLACES), "0.5");
        assert_eq!(format_number(-2.50, DEFAULT_DECIMAL_PLACES), "-2.5");
        assert_eq!(format_number(0.004, DEFAULT_DECIMAL_PLACES), "0");
    }

    #[test]
    fn test_format_decimal_places() {
        assert_eq!(format_number(123.456, 1), "123.5");
        assert_eq!(format_number(123.456, 3), "123.456");
        assert_eq!(format_number(123.000, 2), "123");
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(2.5, 0), "2");
    }

    #[test]
    fn test_validate_input_valid() {
        assert_eq!(validate_input("123"), Some(123.0));
        assert_eq!(validate_input("123.45"), Some(123.45));
        assert_eq!(validate_input("-123"), Some(-123.0));
        assert_eq!(validate_input("0"), Some(0.0));
        assert_eq!(validate_input("  123  "), Some(123.0));
        assert_eq!(validate_input("\t.5\n"), Some(0.5));
    }

    #[test]
    fn test_validate_input_invalid() {
        assert_eq!(validate_input("abc"), None);
        assert_eq!(validate_input(""), None);
        assert_eq!(validate_input("   "), None);
        assert_eq!(validate_input("12a"), None);
        assert_eq!(validate_input("1.2.3"), None);
    }
}

//! Click-through-rate normalization
//!
//! CTR cells arrive as free text: `"5%"`, `"2.5"`, `"2%-5%"`, `""`, or
//! anything a spreadsheet user typed. The first number found is the value;
//! everything else (including parse failures) becomes 0.0.

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d*\.?\d+").expect("CTR number pattern is valid"));

/// Parse a CTR cell into a percentage
///
/// Never fails: missing or unparseable input yields 0.0.
///
/// # Example
///
/// ```
/// use curator_engine::ctr::parse_ctr;
///
/// assert_eq!(parse_ctr("5%"), 5.0);
/// assert_eq!(parse_ctr("2-4%"), 2.0);
/// assert_eq!(parse_ctr(""), 0.0);
/// assert_eq!(parse_ctr("bogus"), 0.0);
/// ```
pub fn parse_ctr(raw: &str) -> f64 {
    FIRST_NUMBER
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_percentage() {
        assert_eq!(parse_ctr("5%"), 5.0);
        assert_eq!(parse_ctr("3.75%"), 3.75);
        assert_eq!(parse_ctr("12"), 12.0);
        assert_eq!(parse_ctr(".5%"), 0.5);
        assert_eq!(parse_ctr("0.25"), 0.25);
    }

    #[test]
    fn test_trailing_dot_keeps_integer() {
        assert_eq!(parse_ctr("5.%"), 5.0);
        assert_eq!(parse_ctr("-3%"), 3.0);
    }

    #[test]
    fn test_ranges_take_first_number() {
        assert_eq!(parse_ctr("2-4%"), 2.0);
        assert_eq!(parse_ctr("2%-5%"), 2.0);
        assert_eq!(parse_ctr("1.5% - 3%"), 1.5);
    }

    #[test]
    fn test_invalid_inputs_are_zero() {
        assert_eq!(parse_ctr(""), 0.0);
        assert_eq!(parse_ctr("   "), 0.0);
        assert_eq!(parse_ctr("bogus"), 0.0);
        assert_eq!(parse_ctr("n/a"), 0.0);
        assert_eq!(parse_ctr("%"), 0.0);
    }

    #[test]
    fn test_number_embedded_in_text() {
        assert_eq!(parse_ctr("approx 4.2 percent"), 4.2);
        assert_eq!(parse_ctr(" 7 % "), 7.0);
    }
}

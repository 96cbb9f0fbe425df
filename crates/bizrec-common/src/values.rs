//! Numeric text helpers.

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Rewrites a numeric value as the integer it truncates to.
///
/// `"+15551234"`, `"15551234.0"` and `"1.5551234E7"` all become
/// `"15551234"`. Values that do not parse, or do not fit an `i64`, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use bizrec_common::integer_text;
///
/// assert_eq!(integer_text("+44.0"), "44");
/// assert_eq!(integer_text("n/a"), "n/a");
/// ```
pub fn integer_text(value: &str) -> String {
    match parse_f64(value) {
        Some(v) if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
            (v as i64).to_string()
        }
        _ => value.to_string(),
    }
}

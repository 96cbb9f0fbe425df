//! Numeric phone coercion.

use bizrec_common::integer_text;

/// Coerces a phone value to its integer representation.
///
/// The value is parsed as a float and truncated, so `"+15551234"` and
/// `"1.5551234E7"` both become `"15551234"`. Values that do not parse, or do
/// not fit an `i64`, are returned unchanged.
pub fn coerce_phone(value: &str) -> String {
    integer_text(value)
}

//! Progressive formatting for international phone numbers.
//!
//! The formatted value is always recomputed from the digits of the raw input,
//! never from a previously formatted string, so editing anywhere in the field
//! (including deleting a bracket or dash) yields a consistent result.

/// Maximum number of digits kept in the formatted output.
pub const MAX_DIGITS: usize = 13;

/// Keep only the ASCII digits of `input`, in their original order.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format raw phone input as `+CC (AA) NNNNN-NNNN`, progressively by digit count.
///
/// The first two digits are treated as the country code and the next two as
/// the area code without any validation.
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input);
    let d = digits.as_str();

    match d.len() {
        0..=2 => digits,
        3..=4 => format!("+{} {}", slice(d, 0, 2), slice(d, 2, MAX_DIGITS)),
        5..=6 => format!(
            "+{} ({}) {}",
            slice(d, 0, 2),
            slice(d, 2, 4),
            slice(d, 4, MAX_DIGITS)
        ),
        7..=10 => format!(
            "+{} ({}) {}-{}",
            slice(d, 0, 2),
            slice(d, 2, 4),
            slice(d, 4, 8),
            slice(d, 8, MAX_DIGITS)
        ),
        _ => format!(
            "+{} ({}) {}-{}",
            slice(d, 0, 2),
            slice(d, 2, 4),
            slice(d, 4, 9),
            slice(d, 9, MAX_DIGITS)
        ),
    }
}

/// `d[start..end]` with both bounds clamped to the length of `d`.
///
/// `d` holds ASCII digits only, so byte offsets are char offsets.
fn slice(d: &str, start: usize, end: usize) -> &str {
    let end = end.min(d.len());
    d.get(start.min(end)..end).unwrap_or("")
}

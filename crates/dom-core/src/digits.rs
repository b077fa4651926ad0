//! # Digit-Sequence Normalizer
//!
//! Every identifier check starts here: user input arrives with dots,
//! dashes, slashes, spaces, or nothing at all, and is reduced to its ASCII
//! digits before any length or checksum rule is applied.

/// Strip everything except the ASCII digits `0`-`9`, preserving order.
///
/// Total function: empty input, or input with no digits, yields an empty
/// string. Non-ASCII digits (e.g. Arabic-Indic numerals) are dropped.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Whether a non-empty string consists of a single repeated character.
///
/// Used to reject `00000000000`-style identifiers that satisfy the naive
/// mod-11 arithmetic but are never issued.
pub fn is_repeated_digit_sequence(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        None => false,
        Some(first) => bytes.all(|b| b == first),
    }
}

/// Convert a digits-only string into numeric values.
///
/// Returns `None` if any character is not an ASCII digit.
pub(crate) fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

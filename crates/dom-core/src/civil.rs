//! # Civil Registry Numbers
//!
//! Voter registration ("título de eleitor") and driver's license (CNH)
//! numbers. Both are accepted on shape alone: the registration forms only
//! collect them as secondary documents, and the issuing bodies' check-digit
//! rules are not applied.

use crate::digits::normalize_digits;

/// Number of digits in a título de eleitor.
pub const TITULO_ELEITOR_LEN: usize = 12;

/// Number of digits in a CNH registration number.
pub const CNH_LEN: usize = 11;

/// Whether `raw` normalizes to exactly 12 digits.
pub fn is_valid_titulo_eleitor(raw: &str) -> bool {
    normalize_digits(raw).len() == TITULO_ELEITOR_LEN
}

/// Whether `raw` normalizes to exactly 11 digits.
pub fn is_valid_cnh(raw: &str) -> bool {
    normalize_digits(raw).len() == CNH_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titulo_eleitor() {
        assert!(is_valid_titulo_eleitor("123456789012"));
        assert!(is_valid_titulo_eleitor("1234 5678 9012"));
        assert!(!is_valid_titulo_eleitor("12345678901"));
        assert!(!is_valid_titulo_eleitor("1234567890123"));
        assert!(!is_valid_titulo_eleitor(""));
    }

    #[test]
    fn cnh() {
        assert!(is_valid_cnh("12345678901"));
        assert!(is_valid_cnh("123.456.789-01"));
        assert!(!is_valid_cnh("1234567890"));
        assert!(!is_valid_cnh("123456789012"));
        assert!(!is_valid_cnh(""));
    }
}

//! # CEP (Postal Code)
//!
//! CEP carries no check digit; validity is purely shape. Whether the code
//! is actually assigned is a question for a postal lookup service and is
//! out of reach of this crate.

use crate::digits::normalize_digits;

/// Number of digits in a CEP.
pub const CEP_LEN: usize = 8;

/// Whether `raw` normalizes to exactly 8 digits.
pub fn is_valid_cep(raw: &str) -> bool {
    normalize_digits(raw).len() == CEP_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_forms() {
        assert!(is_valid_cep("01311-000"));
        assert!(is_valid_cep("01311000"));
        assert!(is_valid_cep("12345-678"));
    }

    #[test]
    fn wrong_length() {
        assert!(!is_valid_cep("123"));
        assert!(!is_valid_cep("12345"));
        assert!(!is_valid_cep("123456789"));
        assert!(!is_valid_cep(""));
    }
}

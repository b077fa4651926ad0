//! # Check-Digit Validators
//!
//! Weighted mod-11 check-digit rules for the three Brazilian registry
//! numbers that carry them:
//!
//! | Identifier | Length | Check digits | Weights | Remainder rule |
//! |------------|--------|--------------|---------|----------------|
//! | CPF  | 11 | 2 | 10..2, then 11..2 | `r = (sum * 10) mod 11`, `10 → 0` |
//! | CNPJ | 14 | 2 | `543298765432`, then `6543298765432` | `r = sum mod 11`, `r < 2 → 0`, else `11 - r` |
//! | PIS  | 11 | 1 | `3298765432` | `r = 11 - (sum mod 11)`, `r > 9 → 0` |
//!
//! CPF and CNPJ additionally reject repeated-digit sequences. PIS does not.
//!
//! Payment card numbers (13 to 19 digits) use the Luhn mod-10 rule instead.
//!
//! Every `is_valid_*` function normalizes first and is total: malformed
//! input is `false`, never a panic.

use crate::digits::{digit_values, is_repeated_digit_sequence, normalize_digits};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Number of digits in a PIS/PASEP.
pub const PIS_LEN: usize = 11;

/// Shortest payment card number accepted.
pub const CREDIT_CARD_MIN_LEN: usize = 13;

/// Longest payment card number accepted.
pub const CREDIT_CARD_MAX_LEN: usize = 19;

const PIS_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn weighted_sum(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// CPF check digit over `digits`, weighting from `len + 1` down to 2.
fn cpf_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let r = (weighted_sum(digits, (2..=top).rev()) * 10) % 11;
    if r == 10 {
        0
    } else {
        r
    }
}

fn cnpj_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let r = weighted_sum(digits, weights.iter().copied()) % 11;
    if r < 2 {
        0
    } else {
        11 - r
    }
}

fn pis_digit(digits: &[u32]) -> u32 {
    let r = 11 - weighted_sum(digits, PIS_WEIGHTS) % 11;
    if r > 9 {
        0
    } else {
        r
    }
}

/// Validate a CPF (individual taxpayer number).
///
/// Valid iff the input normalizes to 11 digits, is not a single repeated
/// digit, and both check digits match.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits = normalize_digits(raw);
    if digits.len() != CPF_LEN || is_repeated_digit_sequence(&digits) {
        return false;
    }
    let Some(d) = digit_values(&digits) else {
        return false;
    };
    cpf_digit(&d[..9]) == d[9] && cpf_digit(&d[..10]) == d[10]
}

/// Validate a CNPJ (company taxpayer number).
///
/// Valid iff the input normalizes to 14 digits, is not a single repeated
/// digit, and both check digits match.
pub fn is_valid_cnpj(raw: &str) -> bool {
    let digits = normalize_digits(raw);
    if digits.len() != CNPJ_LEN || is_repeated_digit_sequence(&digits) {
        return false;
    }
    let Some(d) = digit_values(&digits) else {
        return false;
    };
    cnpj_digit(&d[..12], &CNPJ_FIRST_WEIGHTS) == d[12]
        && cnpj_digit(&d[..13], &CNPJ_SECOND_WEIGHTS) == d[13]
}

/// Validate a PIS/PASEP (worker registration number).
///
/// Valid iff the input normalizes to 11 digits and the 11th digit matches
/// the weighted check digit over the first ten.
pub fn is_valid_pis(raw: &str) -> bool {
    let digits = normalize_digits(raw);
    if digits.len() != PIS_LEN {
        return false;
    }
    let Some(d) = digit_values(&digits) else {
        return false;
    };
    pis_digit(&d[..10]) == d[10]
}

/// Luhn sum: every second digit from the right is doubled, with 9
/// subtracted from doubles above 9.
fn luhn_sum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| match (i % 2, d * 2) {
            (0, _) => d,
            (_, doubled) if doubled > 9 => doubled - 9,
            (_, doubled) => doubled,
        })
        .sum()
}

/// Validate a payment card number (Visa, Mastercard, Amex, Elo, ...).
///
/// Valid iff the input normalizes to 13 to 19 digits and the Luhn sum is
/// a multiple of 10. The issuer is not checked.
pub fn is_valid_credit_card(raw: &str) -> bool {
    let digits = normalize_digits(raw);
    if !(CREDIT_CARD_MIN_LEN..=CREDIT_CARD_MAX_LEN).contains(&digits.len()) {
        return false;
    }
    digit_values(&digits).is_some_and(|d| luhn_sum(&d) % 10 == 0)
}

fn complete(raw: &str, base_len: usize, append: impl Fn(&mut Vec<u32>)) -> Option<String> {
    let digits = normalize_digits(raw);
    if digits.len() != base_len {
        return None;
    }
    let mut values = digit_values(&digits)?;
    append(&mut values);
    Some(values.iter().filter_map(|d| char::from_digit(*d, 10)).collect())
}

/// Append the two CPF check digits to a 9-digit base.
///
/// Returns `None` unless `base` normalizes to exactly 9 digits. The result
/// is only a valid CPF if the base is not a repeated digit.
pub fn complete_cpf(base: &str) -> Option<String> {
    complete(base, CPF_LEN - 2, |v| {
        let first = cpf_digit(v);
        v.push(first);
        let second = cpf_digit(v);
        v.push(second);
    })
}

/// Append the two CNPJ check digits to a 12-digit base.
pub fn complete_cnpj(base: &str) -> Option<String> {
    complete(base, CNPJ_LEN - 2, |v| {
        let first = cnpj_digit(v, &CNPJ_FIRST_WEIGHTS);
        v.push(first);
        let second = cnpj_digit(v, &CNPJ_SECOND_WEIGHTS);
        v.push(second);
    })
}

/// Append the PIS/PASEP check digit to a 10-digit base.
pub fn complete_pis(base: &str) -> Option<String> {
    complete(base, PIS_LEN - 1, |v| {
        let digit = pis_digit(v);
        v.push(digit);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CPF --

    #[test]
    fn cpf_known_valid() {
        assert!(is_valid_cpf("111.444.777-35"));
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn cpf_empty_is_invalid() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("   "));
    }

    #[test]
    fn cpf_repeated_digits_rejected() {
        assert!(!is_valid_cpf("111.111.111-11"));
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{cpf} must be rejected");
        }
    }

    #[test]
    fn cpf_bad_check_digits() {
        assert!(!is_valid_cpf("123.456.789-00"));
        assert!(!is_valid_cpf("111.444.777-36"));
        assert!(!is_valid_cpf("111.444.777-45"));
    }

    #[test]
    fn cpf_wrong_length() {
        assert!(!is_valid_cpf("1114447773"));
        assert!(!is_valid_cpf("111444777350"));
        assert!(!is_valid_cpf("abc"));
    }

    #[test]
    fn cpf_first_digit_remainder_ten_maps_to_zero() {
        // 123456789-09: first check digit comes from remainder 10.
        assert!(is_valid_cpf("123.456.789-09"));
    }

    // -- CNPJ --

    #[test]
    fn cnpj_known_valid() {
        assert!(is_valid_cnpj("11.444.777/0001-61"));
        assert!(is_valid_cnpj("11444777000161"));
        assert!(is_valid_cnpj("12.345.678/0001-95"));
    }

    #[test]
    fn cnpj_invalid() {
        assert!(!is_valid_cnpj("11.444.777/0001-62"));
        assert!(!is_valid_cnpj("11111111111111"));
        assert!(!is_valid_cnpj("123"));
        assert!(!is_valid_cnpj(""));
    }

    // -- PIS --

    #[test]
    fn pis_known_valid() {
        assert!(is_valid_pis("120.43527.72-1"));
        assert!(is_valid_pis("170.33259.50-4"));
    }

    #[test]
    fn pis_check_digit_mismatch() {
        // Weighted sum is 153, 153 mod 11 = 10, 11 - 10 = 1: digit must be 1.
        assert!(!is_valid_pis("120.43527.72-8"));
    }

    #[test]
    fn pis_wrong_length() {
        assert!(!is_valid_pis(""));
        assert!(!is_valid_pis("1204352772"));
        assert!(!is_valid_pis("120435277210"));
    }

    #[test]
    fn pis_remainder_zero_or_one_maps_to_zero() {
        // All zeros: sum 0, 11 - 0 = 11 > 9, check digit 0.
        assert!(is_valid_pis("00000000000"));
    }

    // -- Credit card --

    #[test]
    fn card_known_valid() {
        assert!(is_valid_credit_card("4532015112830366")); // Visa
        assert!(is_valid_credit_card("5424000000000015")); // Mastercard
        assert!(is_valid_credit_card("378282246310005")); // Amex
        assert!(is_valid_credit_card("4532 0151 1283 0366"));
    }

    #[test]
    fn card_known_invalid() {
        assert!(!is_valid_credit_card("453201511283036"));
        assert!(!is_valid_credit_card("45320151128303666"));
        assert!(!is_valid_credit_card("4532015112830367"));
        assert!(!is_valid_credit_card(""));
    }

    #[test]
    fn card_length_bounds() {
        // Luhn-valid but only 11 digits.
        assert!(!is_valid_credit_card("79927398713"));
        assert!(!is_valid_credit_card(&"4".repeat(20)));
    }

    // -- complete_* --

    #[test]
    fn complete_cpf_appends_check_digits() {
        assert_eq!(complete_cpf("111.444.777").as_deref(), Some("11144477735"));
        assert_eq!(complete_cpf("12345678"), None);
    }

    #[test]
    fn complete_cnpj_appends_check_digits() {
        assert_eq!(complete_cnpj("11.444.777/0001").as_deref(), Some("11444777000161"));
        assert_eq!(complete_cnpj("1144477700"), None);
    }

    #[test]
    fn complete_pis_appends_check_digit() {
        assert_eq!(complete_pis("1204352772").as_deref(), Some("12043527721"));
        assert_eq!(complete_pis("120"), None);
    }
}

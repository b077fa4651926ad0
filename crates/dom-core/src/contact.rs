//! # Contact Fields
//!
//! Shape checks for e-mail addresses and Brazilian phone numbers as typed
//! into registration forms. These are syntactic only: no MX lookup, no
//! carrier lookup.

use std::sync::OnceLock;

use regex::Regex;

use crate::digits::normalize_digits;

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("static email pattern compiles")
    })
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?[1-9]{2}\)? ?(?:[2-8]|9[1-9])[0-9]{3}-?[0-9]{4}$")
            .expect("static phone pattern compiles")
    })
}

fn cell_phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?[1-9]{2}\)? ?9[0-9]{4}-?[0-9]{4}$")
            .expect("static cell phone pattern compiles")
    })
}

/// `local@domain.tld` with a TLD of at least two letters.
pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_match(raw)
}

/// Brazilian landline or mobile number with area code.
///
/// Accepts `(11) 3333-4444`, `(11) 99999-8888`, `1133334444` and similar;
/// the subscriber part starts with 2-8 (landline) or 9 followed by 1-9
/// (mobile).
pub fn is_valid_phone(raw: &str) -> bool {
    let len = normalize_digits(raw).len();
    phone_pattern().is_match(raw) && (len == 10 || len == 11)
}

/// Brazilian mobile number with area code: `(11) 91234-5678`.
pub fn is_valid_cell_phone(raw: &str) -> bool {
    cell_phone_pattern().is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_valid() {
        assert!(is_valid_email("teste@exemplo.com"));
        assert!(is_valid_email("teste.nome@exemplo.com.br"));
        assert!(is_valid_email("a+b@x.io"));
    }

    #[test]
    fn email_invalid() {
        assert!(!is_valid_email("teste@"));
        assert!(!is_valid_email("teste@exemplo"));
        assert!(!is_valid_email("teste.exemplo.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[test]
    fn phone_landline_and_mobile() {
        assert!(is_valid_phone("(11) 3333-4444"));
        assert!(is_valid_phone("(11) 33334444"));
        assert!(is_valid_phone("(11) 99999-8888"));
        assert!(is_valid_phone("1133334444"));
    }

    #[test]
    fn phone_invalid() {
        assert!(!is_valid_phone("(11) 333-4444"));
        assert!(!is_valid_phone("(11) 33333-4444"));
        assert!(!is_valid_phone("(01) 3333-4444"));
        assert!(!is_valid_phone("(11) 1333-4444"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn cell_phone() {
        assert!(is_valid_cell_phone("(11) 91234-5678"));
        assert!(is_valid_cell_phone("(11) 912345678"));
        assert!(is_valid_cell_phone("11912345678"));
        assert!(!is_valid_cell_phone("(11) 3333-4444"));
        assert!(!is_valid_cell_phone("(11) 81234-5678"));
    }
}

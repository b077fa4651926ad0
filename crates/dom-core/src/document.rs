//! # Composite Document Check
//!
//! "Documento" fields accept either a CPF (individual employer) or a CNPJ
//! (company employer). The kind is decided by the normalized length alone;
//! an unrecognized length is a definite `false`, not an error.

use serde::{Deserialize, Serialize};

use crate::checksum::{is_valid_cnpj, is_valid_cpf, CNPJ_LEN, CPF_LEN};
use crate::digits::normalize_digits;

/// Which taxpayer registry a document number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// 11-digit individual taxpayer number.
    Cpf,
    /// 14-digit company taxpayer number.
    Cnpj,
}

impl DocumentKind {
    /// Route by normalized length: 11 → CPF, 14 → CNPJ, else `None`.
    ///
    /// Only the length is inspected; check digits are not verified.
    pub fn detect(raw: &str) -> Option<Self> {
        match normalize_digits(raw).len() {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a CPF-or-CNPJ document number.
pub fn is_valid_document(raw: &str) -> bool {
    match DocumentKind::detect(raw) {
        Some(DocumentKind::Cpf) => is_valid_cpf(raw),
        Some(DocumentKind::Cnpj) => is_valid_cnpj(raw),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_by_length() {
        assert_eq!(DocumentKind::detect("111.444.777-35"), Some(DocumentKind::Cpf));
        assert_eq!(DocumentKind::detect("11.444.777/0001-61"), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::detect("123"), None);
        assert_eq!(DocumentKind::detect(""), None);
    }

    #[test]
    fn valid_cpf_and_cnpj() {
        assert!(is_valid_document("111.444.777-35"));
        assert!(is_valid_document("11.444.777/0001-61"));
    }

    #[test]
    fn invalid_checksums_for_recognized_lengths() {
        assert!(!is_valid_document("111.444.777-36"));
        assert!(!is_valid_document("11.444.777/0001-62"));
        assert!(!is_valid_document("00000000000000"));
    }

    #[test]
    fn other_lengths_are_false() {
        for len in [0, 1, 8, 10, 12, 13, 15, 20] {
            let digits = "1".repeat(len);
            assert!(!is_valid_document(&digits), "length {len}");
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(DocumentKind::Cpf.to_string(), "cpf");
        assert_eq!(DocumentKind::Cnpj.to_string(), "cnpj");
    }
}

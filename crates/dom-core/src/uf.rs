//! # Federative Units
//!
//! The closed set of 27 Brazilian federative units (26 states plus the
//! Federal District). Every `match` on [`Uf`] is exhaustive, so the set
//! cannot silently drift between address forms, eSocial payloads, and
//! the CLI.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A Brazilian federative unit, serialized as its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

/// Number of federative units.
pub const UF_COUNT: usize = 27;

impl Uf {
    /// All federative units, in the conventional alphabetical-by-name order
    /// used by Brazilian address forms.
    pub const ALL: [Uf; UF_COUNT] = [
        Self::Ac,
        Self::Al,
        Self::Ap,
        Self::Am,
        Self::Ba,
        Self::Ce,
        Self::Df,
        Self::Es,
        Self::Go,
        Self::Ma,
        Self::Mt,
        Self::Ms,
        Self::Mg,
        Self::Pa,
        Self::Pb,
        Self::Pr,
        Self::Pe,
        Self::Pi,
        Self::Rj,
        Self::Rn,
        Self::Rs,
        Self::Ro,
        Self::Rr,
        Self::Sc,
        Self::Sp,
        Self::Se,
        Self::To,
    ];

    /// The two-letter uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Full name of the unit.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ac => "Acre",
            Self::Al => "Alagoas",
            Self::Ap => "Amapá",
            Self::Am => "Amazonas",
            Self::Ba => "Bahia",
            Self::Ce => "Ceará",
            Self::Df => "Distrito Federal",
            Self::Es => "Espírito Santo",
            Self::Go => "Goiás",
            Self::Ma => "Maranhão",
            Self::Mt => "Mato Grosso",
            Self::Ms => "Mato Grosso do Sul",
            Self::Mg => "Minas Gerais",
            Self::Pa => "Pará",
            Self::Pb => "Paraíba",
            Self::Pr => "Paraná",
            Self::Pe => "Pernambuco",
            Self::Pi => "Piauí",
            Self::Rj => "Rio de Janeiro",
            Self::Rn => "Rio Grande do Norte",
            Self::Rs => "Rio Grande do Sul",
            Self::Ro => "Rondônia",
            Self::Rr => "Roraima",
            Self::Sc => "Santa Catarina",
            Self::Sp => "São Paulo",
            Self::Se => "Sergipe",
            Self::To => "Tocantins",
        }
    }

    /// Parse a code case-insensitively. No trimming, no fuzzy matching.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUf`] if the input is not one of
    /// the 27 codes.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let upper = raw.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|uf| uf.as_str() == upper)
            .ok_or_else(|| ValidationError::InvalidUf(raw.to_string()))
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether `raw`, uppercased, is one of the 27 federative unit codes.
pub fn is_valid_uf(raw: &str) -> bool {
    Uf::parse(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_count() {
        assert_eq!(Uf::ALL.len(), UF_COUNT);
        assert_eq!(UF_COUNT, 27);
    }

    #[test]
    fn all_unique() {
        let mut seen = std::collections::HashSet::new();
        for uf in Uf::ALL {
            assert!(seen.insert(uf.as_str()), "duplicate UF: {uf}");
        }
    }

    #[test]
    fn case_insensitive() {
        assert!(is_valid_uf("sp"));
        assert!(is_valid_uf("Sp"));
        assert!(is_valid_uf("SP"));
        assert_eq!(Uf::parse("rj").unwrap(), Uf::Rj);
    }

    #[test]
    fn rejects_unknown_and_malformed() {
        assert!(!is_valid_uf("XX"));
        assert!(!is_valid_uf(""));
        assert!(!is_valid_uf("S"));
        assert!(!is_valid_uf("SPA"));
        assert!(!is_valid_uf(" SP"));
        assert!(!is_valid_uf("São Paulo"));
    }

    #[test]
    fn parse_error_carries_input() {
        let err = Uf::parse("zz").unwrap_err();
        assert_eq!(err, ValidationError::InvalidUf("zz".to_string()));
    }

    #[test]
    fn as_str_roundtrip() {
        for uf in Uf::ALL {
            let parsed: Uf = uf.as_str().parse().unwrap();
            assert_eq!(uf, parsed);
        }
    }

    #[test]
    fn serde_format_matches_as_str() {
        for uf in Uf::ALL {
            let json = serde_json::to_string(&uf).unwrap();
            assert_eq!(json, format!("\"{}\"", uf.as_str()));
            let back: Uf = serde_json::from_str(&json).unwrap();
            assert_eq!(back, uf);
        }
    }

    #[test]
    fn names_are_present() {
        assert_eq!(Uf::Sp.name(), "São Paulo");
        assert_eq!(Uf::Df.name(), "Distrito Federal");
        for uf in Uf::ALL {
            assert!(!uf.name().is_empty());
        }
    }
}

//! # Identifier Newtypes
//!
//! Validated newtypes for Brazilian registry numbers. Each identifier is a
//! distinct type: you cannot pass a [`Pis`] where a [`Cpf`] is expected,
//! even though both are 11 digits.
//!
//! ## Validation
//!
//! Constructors accept raw user input (masked or not), run the matching
//! check from [`crate::checksum`] or [`crate::address`], and store the
//! canonical digits-only form. `Display` renders the conventional mask.
//! Deserialization routes through the constructor, so an invalid value is
//! rejected at the serde boundary instead of being silently accepted.

use serde::{Deserialize, Serialize};

use crate::address::is_valid_cep;
use crate::checksum::{is_valid_cnpj, is_valid_cpf, is_valid_pis};
use crate::digits::normalize_digits;
use crate::document::DocumentKind;
use crate::error::ValidationError;
use crate::mask::{mask_cep, mask_cnpj, mask_cpf, mask_pis};

/// Implement `Deserialize` and `FromStr` for string newtypes by routing
/// through the type's `new()` constructor.
macro_rules! impl_validating_parse {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Individual taxpayer number (Cadastro de Pessoa Física).
///
/// # Validation
///
/// - 11 digits after stripping formatting
/// - Not a single repeated digit
/// - Both check digits match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_parse!(Cpf);

impl Cpf {
    /// Create a CPF from raw input, storing the 11 canonical digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the input is not a valid CPF.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cpf(&raw) {
            return Err(ValidationError::InvalidCpf(raw));
        }
        Ok(Self(normalize_digits(&raw)))
    }

    /// The 11 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `000.000.000-00`
    pub fn formatted(&self) -> String {
        mask_cpf(&self.0)
    }
}

/// Company taxpayer number (Cadastro Nacional da Pessoa Jurídica).
///
/// # Validation
///
/// - 14 digits after stripping formatting
/// - Not a single repeated digit
/// - Both check digits match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_parse!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from raw input, storing the 14 canonical digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] if the input is not a valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cnpj(&raw) {
            return Err(ValidationError::InvalidCnpj(raw));
        }
        Ok(Self(normalize_digits(&raw)))
    }

    /// The 14 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `00.000.000/0000-00`
    pub fn formatted(&self) -> String {
        mask_cnpj(&self.0)
    }

    /// The 8-digit root shared by every branch of the company.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch ("filial") number; `0001` is the head office.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }
}

/// Worker registration number (PIS/PASEP/NIT).
///
/// # Validation
///
/// - 11 digits after stripping formatting
/// - Check digit matches
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pis(String);

impl_validating_parse!(Pis);

impl Pis {
    /// Create a PIS/PASEP from raw input, storing the 11 canonical digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPis`] if the input is not a valid PIS.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_pis(&raw) {
            return Err(ValidationError::InvalidPis(raw));
        }
        Ok(Self(normalize_digits(&raw)))
    }

    /// The 11 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `000.00000.00-0`
    pub fn formatted(&self) -> String {
        mask_pis(&self.0)
    }
}

/// Postal code (Código de Endereçamento Postal).
///
/// # Validation
///
/// - 8 digits after stripping formatting; no checksum
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cep(String);

impl_validating_parse!(Cep);

impl Cep {
    /// Create a CEP from raw input, storing the 8 canonical digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCep`] if the input does not
    /// normalize to 8 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cep(&raw) {
            return Err(ValidationError::InvalidCep(raw));
        }
        Ok(Self(normalize_digits(&raw)))
    }

    /// The 8 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `00000-000`
    pub fn formatted(&self) -> String {
        mask_cep(&self.0)
    }
}

/// A CPF or a CNPJ, as accepted by "documento" fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxDocument {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl TaxDocument {
    /// Classify raw input by length and validate it as that kind.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] if the input is neither
    /// a valid CPF nor a valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let parsed = match DocumentKind::detect(&raw) {
            Some(DocumentKind::Cpf) => Cpf::new(raw.as_str()).map(Self::Cpf),
            Some(DocumentKind::Cnpj) => Cnpj::new(raw.as_str()).map(Self::Cnpj),
            None => return Err(ValidationError::InvalidDocument(raw)),
        };
        parsed.map_err(|_| ValidationError::InvalidDocument(raw))
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Canonical digits of the underlying identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl<'de> Deserialize<'de> for TaxDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for TaxDocument {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for TaxDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl From<Cpf> for TaxDocument {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for TaxDocument {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

//! # Error Hierarchy
//!
//! Structured error types for DOM, built with `thiserror`.
//!
//! The boolean `is_valid_*` family never produces an error: any input,
//! including empty or garbage strings, yields `false`. Errors only appear
//! at the validated-newtype boundary ([`crate::identity`]), where callers
//! want to know *why* a value was rejected, and in [`DomError`] for callers
//! that combine validation with parsing ([`crate::batch`]).

use thiserror::Error;

/// Top-level error type for DOM.
#[derive(Error, Debug)]
pub enum DomError {
    /// Identifier or field validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A value list could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for identifier newtypes.
///
/// Each variant carries the raw input that was rejected and states the
/// expected shape, so a form layer or operator can tell what went wrong
/// without re-running the check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// CPF has the wrong length, is a repeated-digit sequence, or fails
    /// the check digits.
    #[error("invalid CPF: \"{0}\" (expected 11 digits with valid check digits, e.g. 000.000.000-00)")]
    InvalidCpf(String),

    /// CNPJ has the wrong length, is a repeated-digit sequence, or fails
    /// the check digits.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with valid check digits, e.g. 00.000.000/0000-00)")]
    InvalidCnpj(String),

    /// PIS/PASEP has the wrong length or fails the check digit.
    #[error("invalid PIS/PASEP: \"{0}\" (expected 11 digits with a valid check digit, e.g. 000.00000.00-0)")]
    InvalidPis(String),

    /// CEP does not normalize to 8 digits.
    #[error("invalid CEP: \"{0}\" (expected 8 digits, e.g. 00000-000)")]
    InvalidCep(String),

    /// Not one of the 27 federative unit codes.
    #[error("invalid UF: \"{0}\" (expected a two-letter Brazilian state code such as SP)")]
    InvalidUf(String),

    /// Neither a valid CPF (11 digits) nor a valid CNPJ (14 digits).
    #[error("invalid document: \"{0}\" (expected a valid CPF or CNPJ)")]
    InvalidDocument(String),
}

impl ValidationError {
    /// The raw input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidCpf(s)
            | Self::InvalidCnpj(s)
            | Self::InvalidPis(s)
            | Self::InvalidCep(s)
            | Self::InvalidUf(s)
            | Self::InvalidDocument(s) => s,
        }
    }
}

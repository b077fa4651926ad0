//! # dom-core: Brazilian Identifier Validation
//!
//! The validation core of DOM, the domestic-employer HR/payroll platform.
//! Every registration form (empregado, empregador, familiar, parceiro)
//! funnels its identifier fields through this crate before anything is
//! persisted or sent to eSocial.
//!
//! ## Key Design Principles
//!
//! 1. **Total boolean checks.** `is_valid_cpf`, `is_valid_pis`,
//!    `is_valid_cep`, `is_valid_uf`, `is_valid_cnpj`, `is_valid_document`
//!    take any `&str` and return `bool`. Empty or garbage input is `false`;
//!    nothing panics and nothing needs a `match` on an error.
//!
//! 2. **Normalize first.** Every numeric identifier is reduced to its ASCII
//!    digits by [`normalize_digits`] before length or checksum rules run, so
//!    masked and unmasked input behave identically.
//!
//! 3. **Newtype wrappers for identifiers.** [`Cpf`], [`Cnpj`], [`Pis`],
//!    [`Cep`], [`Uf`], [`TaxDocument`] can only hold valid values, store the
//!    canonical digits, and reject invalid input at deserialization.
//!
//! 4. **One algorithm per identifier.** A single canonical check-digit rule
//!    lives in [`checksum`]; nothing else re-implements it.
//!
//! ## Crate Policy
//!
//! - No I/O, no global mutable state, no logging. [`batch`] parses value
//!   lists from text the caller has already read.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests. `.expect()` appears only
//!   where a constant regex pattern is compiled.

pub mod address;
pub mod batch;
pub mod calendar;
pub mod checksum;
pub mod civil;
pub mod contact;
pub mod digits;
pub mod document;
pub mod error;
pub mod identity;
pub mod mask;
pub mod money;
pub mod password;
pub mod uf;

// Re-export primary types for ergonomic imports.
pub use address::{is_valid_cep, CEP_LEN};
pub use batch::parse_value_list;
pub use checksum::{
    is_valid_cnpj, is_valid_cpf, is_valid_credit_card, is_valid_pis, CNPJ_LEN, CPF_LEN, PIS_LEN,
};
pub use civil::{is_valid_cnh, is_valid_titulo_eleitor, CNH_LEN, TITULO_ELEITOR_LEN};
pub use digits::normalize_digits;
pub use document::{is_valid_document, DocumentKind};
pub use error::{DomError, ValidationError};
pub use identity::{Cep, Cnpj, Cpf, Pis, TaxDocument};
pub use money::{format_currency, is_valid_currency, parse_currency};
pub use uf::{is_valid_uf, Uf};

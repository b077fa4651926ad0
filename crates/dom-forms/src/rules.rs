//! # Field Rules
//!
//! A single dispatch point from "what kind of field is this" to the
//! matching `dom_core` check. The form validators and the CLI both go
//! through [`IdentifierKind`], so a field kind is checked the same way
//! everywhere.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use dom_core::{calendar, contact, mask, money, Cep, Cnpj, Cpf, Pis, TaxDocument, Uf};

/// A check applied to one raw form value.
pub trait FieldCheck {
    /// Whether `raw` is acceptable. Never panics.
    fn check(&self, raw: &str) -> bool;

    /// pt-BR message shown when [`FieldCheck::check`] fails.
    fn invalid_message(&self) -> &'static str;
}

/// Every kind of field with a dedicated check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    Cpf,
    Cnpj,
    Pis,
    Cep,
    Uf,
    /// CPF or CNPJ.
    Document,
    Email,
    Phone,
    CellPhone,
    /// `YYYY-MM-DD`
    Date,
    /// `DD/MM/YYYY`
    BrDate,
    /// `HH:MM`
    Time,
    CreditCard,
    TituloEleitor,
    Cnh,
    /// Amount in reais, `1.412,00`.
    Currency,
}

impl IdentifierKind {
    pub const ALL: [IdentifierKind; 16] = [
        Self::Cpf,
        Self::Cnpj,
        Self::Pis,
        Self::Cep,
        Self::Uf,
        Self::Document,
        Self::Email,
        Self::Phone,
        Self::CellPhone,
        Self::Date,
        Self::BrDate,
        Self::Time,
        Self::CreditCard,
        Self::TituloEleitor,
        Self::Cnh,
        Self::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Pis => "pis",
            Self::Cep => "cep",
            Self::Uf => "uf",
            Self::Document => "document",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CellPhone => "cell-phone",
            Self::Date => "date",
            Self::BrDate => "br-date",
            Self::Time => "time",
            Self::CreditCard => "credit-card",
            Self::TituloEleitor => "titulo-eleitor",
            Self::Cnh => "cnh",
            Self::Currency => "currency",
        }
    }

    /// Canonical presentation of a valid value, or `None` if `raw` fails
    /// the check.
    ///
    /// Identifiers are rendered with their mask, UF in uppercase, phones
    /// with the `(00) 00000-0000` mask, dates and times in the same layout
    /// they were accepted in, amounts as `R$ 1.412,00`.
    pub fn canonical(&self, raw: &str) -> Option<String> {
        match self {
            Self::Cpf => Cpf::new(raw).ok().map(|v| v.formatted()),
            Self::Cnpj => Cnpj::new(raw).ok().map(|v| v.formatted()),
            Self::Pis => Pis::new(raw).ok().map(|v| v.formatted()),
            Self::Cep => Cep::new(raw).ok().map(|v| v.formatted()),
            Self::Uf => Uf::parse(raw).ok().map(|v| v.as_str().to_string()),
            Self::Document => TaxDocument::new(raw).ok().map(|v| v.formatted()),
            Self::Email => contact::is_valid_email(raw).then(|| raw.to_string()),
            Self::Phone | Self::CellPhone => self.check(raw).then(|| mask::mask_phone(raw)),
            Self::Date => calendar::parse_iso_date(raw).map(|d| d.format("%Y-%m-%d").to_string()),
            Self::BrDate => calendar::parse_br_date(raw).map(|d| d.format("%d/%m/%Y").to_string()),
            Self::Time => calendar::parse_time(raw).map(|t| t.format("%H:%M").to_string()),
            Self::CreditCard => self.check(raw).then(|| mask::mask_credit_card(raw)),
            Self::TituloEleitor => self.check(raw).then(|| mask::mask_titulo_eleitor(raw)),
            Self::Cnh => self.check(raw).then(|| mask::mask_cnh(raw)),
            Self::Currency => money::parse_currency(raw).map(money::format_currency),
        }
    }
}

impl FieldCheck for IdentifierKind {
    fn check(&self, raw: &str) -> bool {
        match self {
            Self::Cpf => dom_core::is_valid_cpf(raw),
            Self::Cnpj => dom_core::is_valid_cnpj(raw),
            Self::Pis => dom_core::is_valid_pis(raw),
            Self::Cep => dom_core::is_valid_cep(raw),
            Self::Uf => dom_core::is_valid_uf(raw),
            Self::Document => dom_core::is_valid_document(raw),
            Self::Email => contact::is_valid_email(raw),
            Self::Phone => contact::is_valid_phone(raw),
            Self::CellPhone => contact::is_valid_cell_phone(raw),
            Self::Date => calendar::is_valid_iso_date(raw),
            Self::BrDate => calendar::is_valid_br_date(raw),
            Self::Time => calendar::is_valid_time(raw),
            Self::CreditCard => dom_core::is_valid_credit_card(raw),
            Self::TituloEleitor => dom_core::is_valid_titulo_eleitor(raw),
            Self::Cnh => dom_core::is_valid_cnh(raw),
            Self::Currency => money::is_valid_currency(raw),
        }
    }

    fn invalid_message(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF inválido",
            Self::Cnpj => "CNPJ inválido",
            Self::Pis => "PIS inválido",
            Self::Cep => "CEP inválido",
            Self::Uf => "UF inválida",
            Self::Document => "CPF/CNPJ inválido",
            Self::Email => "E-mail inválido",
            Self::Phone => "Telefone inválido",
            Self::CellPhone => "Celular inválido",
            Self::Date | Self::BrDate => "Data inválida",
            Self::Time => "Horário inválido",
            Self::CreditCard => "Cartão de crédito inválido",
            Self::TituloEleitor => "Título de eleitor inválido",
            Self::Cnh => "CNH inválida",
            Self::Currency => "Valor inválido",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown field kind: {s:?}"))
    }
}

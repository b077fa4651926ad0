//! # Registration Records
//!
//! Raw employee and employer records as submitted by the registration
//! forms. Field values are kept as typed strings: validation happens in
//! [`crate::validate`], and only normalized values should be persisted.

use serde::{Deserialize, Serialize};

use dom_core::{normalize_digits, parse_currency};

/// Postal address block shared by every registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endereco {
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
}

impl Endereco {
    /// Digits-only CEP, uppercase UF, trimmed free-text fields.
    pub fn normalized(&self) -> Self {
        Self {
            cep: normalize_digits(&self.cep),
            logradouro: self.logradouro.trim().to_string(),
            numero: self.numero.trim().to_string(),
            complemento: self
                .complemento
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            bairro: self.bairro.trim().to_string(),
            cidade: self.cidade.trim().to_string(),
            uf: self.uf.trim().to_ascii_uppercase(),
        }
    }
}

/// Domestic employee registration ("empregado doméstico").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmpregadoForm {
    pub nome: String,
    pub cpf: String,
    pub pis: Option<String>,
    pub data_nascimento: String,
    pub cargo: String,
    pub salario: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Endereco,
}

impl EmpregadoForm {
    /// The record as it should be persisted: trimmed name, digits-only
    /// identifiers and phone, salary as a plain decimal (`1412.00`),
    /// normalized address. A salary that is not a valid amount is only
    /// trimmed, so validation can still report it.
    pub fn normalized(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            cpf: normalize_digits(&self.cpf),
            pis: normalize_optional(self.pis.as_deref()),
            data_nascimento: self.data_nascimento.trim().to_string(),
            cargo: self.cargo.trim().to_string(),
            salario: normalize_amount(&self.salario),
            email: trim_optional(self.email.as_deref()),
            telefone: normalize_optional(self.telefone.as_deref()),
            endereco: self.endereco.normalized(),
        }
    }
}

/// Employer registration ("empregador").
///
/// A domestic employer is usually an individual, so `documento` accepts a
/// CPF as well as a CNPJ. Records using the older `cnpj` key still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmpregadorForm {
    pub nome: String,
    #[serde(alias = "cnpj", alias = "cpf")]
    pub documento: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Endereco,
}

impl EmpregadorForm {
    pub fn normalized(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            documento: normalize_digits(&self.documento),
            email: trim_optional(self.email.as_deref()),
            telefone: normalize_optional(self.telefone.as_deref()),
            endereco: self.endereco.normalized(),
        }
    }
}

fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn normalize_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_currency(trimmed) {
        Some(centavos) => format!("{}.{:02}", centavos / 100, centavos % 100),
        None => trimmed.to_string(),
    }
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value.map(normalize_digits).filter(|s| !s.is_empty())
}

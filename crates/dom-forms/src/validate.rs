//! # Record Validation
//!
//! Field-by-field validation of registration records. Every record is
//! normalized first, so masked input ("111.444.777-35", "sp") is judged
//! on its canonical content. Problems are collected, not short-circuited:
//! the result lists every failing field with a pt-BR message keyed by the
//! field's JSON path (`"cpf"`, `"endereco.uf"`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dom_core::{DocumentKind, CEP_LEN, CPF_LEN};

use crate::form::{EmpregadoForm, EmpregadorForm, Endereco};
use crate::rules::{FieldCheck, IdentifierKind};

/// Minimum digit count of a phone number (DDD + 8-digit landline).
pub const PHONE_MIN_DIGITS: usize = 10;

/// Field path to message. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Records a message for `field`. The first message for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Entries in field-path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Validate an employee record.
///
/// The salary is checked as typed, before normalization rewrites it.
pub fn validate_empregado(form: &EmpregadoForm) -> FieldErrors {
    let salario = form.salario.trim();
    let form = form.normalized();
    let mut errors = FieldErrors::new();

    if form.nome.is_empty() {
        errors.insert("nome", "Nome é obrigatório");
    }

    if form.cpf.is_empty() {
        errors.insert("cpf", "CPF é obrigatório");
    } else if form.cpf.len() != CPF_LEN {
        errors.insert("cpf", "CPF deve ter 11 dígitos");
    } else if !IdentifierKind::Cpf.check(&form.cpf) {
        errors.insert("cpf", IdentifierKind::Cpf.invalid_message());
    }

    if let Some(pis) = &form.pis {
        if !IdentifierKind::Pis.check(pis) {
            errors.insert("pis", IdentifierKind::Pis.invalid_message());
        }
    }

    if form.data_nascimento.is_empty() {
        errors.insert("dataNascimento", "Data de nascimento é obrigatória");
    } else if !IdentifierKind::Date.check(&form.data_nascimento)
        && !IdentifierKind::BrDate.check(&form.data_nascimento)
    {
        errors.insert("dataNascimento", "Data de nascimento inválida");
    }

    if form.cargo.is_empty() {
        errors.insert("cargo", "Cargo é obrigatório");
    }

    if salario.is_empty() {
        errors.insert("salario", "Salário é obrigatório");
    } else if !IdentifierKind::Currency.check(salario) {
        errors.insert("salario", IdentifierKind::Currency.invalid_message());
    }

    check_contact(form.email.as_deref(), form.telefone.as_deref(), &mut errors);
    check_endereco(&form.endereco, &mut errors);

    tracing::debug!(form = "empregado", errors = errors.len(), "validated record");
    errors
}

/// Validate an employer record. The document may be a CPF or a CNPJ.
pub fn validate_empregador(form: &EmpregadorForm) -> FieldErrors {
    let form = form.normalized();
    let mut errors = FieldErrors::new();

    if form.nome.is_empty() {
        errors.insert("nome", "Nome é obrigatório");
    }

    if form.documento.is_empty() {
        errors.insert("documento", "Documento é obrigatório");
    } else {
        let rule = match DocumentKind::detect(&form.documento) {
            Some(DocumentKind::Cpf) => Some(IdentifierKind::Cpf),
            Some(DocumentKind::Cnpj) => Some(IdentifierKind::Cnpj),
            None => None,
        };
        match rule {
            None => errors.insert(
                "documento",
                "Documento deve ter 11 (CPF) ou 14 (CNPJ) dígitos",
            ),
            Some(rule) if !rule.check(&form.documento) => {
                errors.insert("documento", rule.invalid_message())
            }
            Some(_) => {}
        }
    }

    check_contact(form.email.as_deref(), form.telefone.as_deref(), &mut errors);
    check_endereco(&form.endereco, &mut errors);

    tracing::debug!(form = "empregador", errors = errors.len(), "validated record");
    errors
}

fn check_contact(email: Option<&str>, telefone: Option<&str>, errors: &mut FieldErrors) {
    if let Some(email) = email {
        if !IdentifierKind::Email.check(email) {
            errors.insert("email", IdentifierKind::Email.invalid_message());
        }
    }
    if let Some(telefone) = telefone {
        if telefone.len() < PHONE_MIN_DIGITS {
            errors.insert("telefone", "Telefone deve ter no mínimo 10 dígitos");
        }
    }
}

fn check_endereco(endereco: &Endereco, errors: &mut FieldErrors) {
    if endereco.cep.is_empty() {
        errors.insert("endereco.cep", "CEP é obrigatório");
    } else if endereco.cep.len() != CEP_LEN {
        errors.insert("endereco.cep", "CEP deve ter 8 dígitos");
    }

    let required = [
        ("endereco.logradouro", &endereco.logradouro, "Logradouro é obrigatório"),
        ("endereco.numero", &endereco.numero, "Número é obrigatório"),
        ("endereco.bairro", &endereco.bairro, "Bairro é obrigatório"),
        ("endereco.cidade", &endereco.cidade, "Cidade é obrigatória"),
    ];
    for (field, value, message) in required {
        if value.is_empty() {
            errors.insert(field, message);
        }
    }

    if endereco.uf.is_empty() {
        errors.insert("endereco.uf", "UF é obrigatória");
    } else if endereco.uf.chars().count() != 2 {
        errors.insert("endereco.uf", "UF deve ter 2 caracteres");
    } else if !IdentifierKind::Uf.check(&endereco.uf) {
        errors.insert("endereco.uf", IdentifierKind::Uf.invalid_message());
    }
}

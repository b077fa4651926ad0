//! # Identifier Subcommands
//!
//! `dom check`, `dom normalize` and `dom format`: one-shot operations on
//! identifiers given on the command line. `dom password` reads its input
//! from stdin so the secret stays out of shell history.
//!
//! ```bash
//! dom check cpf 111.444.777-35 123.456.789-00
//! dom check cpf --file employees.txt
//! dom normalize "01311-000"
//! dom format document 11444777000161
//! dom format date 01012023
//! printf 'Senha@123' | dom password
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use dom_core::password::check_password;
use dom_core::{mask, normalize_digits, parse_value_list};
use dom_forms::{FieldCheck, IdentifierKind};

use crate::config::{CliConfig, OutputFormat};
use crate::{EXIT_INVALID, EXIT_VALID};

/// Arguments for `dom check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Field kind: cpf, cnpj, pis, cep, uf, document, email, phone,
    /// cell-phone, date, br-date, time, credit-card, titulo-eleitor, cnh,
    /// currency.
    pub kind: IdentifierKind,

    /// Values to check.
    #[arg(required_unless_present = "file")]
    pub values: Vec<String>,

    /// Also check the values listed in this file: one per line (`#`
    /// starts a comment) or a JSON array of strings.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl CheckArgs {
    /// Command-line values followed by the values read from `--file`.
    fn collect_values(&self) -> Result<Vec<String>> {
        let mut values = self.values.clone();
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading value list {}", path.display()))?;
            let listed = parse_value_list(&text)
                .with_context(|| format!("parsing value list {}", path.display()))?;
            tracing::debug!(path = %path.display(), values = listed.len(), "loaded value list");
            values.extend(listed);
        }
        Ok(values)
    }
}

/// Arguments for `dom normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Identifier kinds that have a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MaskKind {
    Cpf,
    Cnpj,
    Pis,
    Cep,
    /// CPF or CNPJ, chosen by length.
    Document,
    Phone,
    /// `DD/MM/AAAA`
    Date,
    /// `HH:MM`
    Time,
    CreditCard,
    TituloEleitor,
    Cnh,
    /// Amount in reais. With `--mask-only` the digits are read as centavos.
    Currency,
}

impl MaskKind {
    fn rule(self) -> IdentifierKind {
        match self {
            Self::Cpf => IdentifierKind::Cpf,
            Self::Cnpj => IdentifierKind::Cnpj,
            Self::Pis => IdentifierKind::Pis,
            Self::Cep => IdentifierKind::Cep,
            Self::Document => IdentifierKind::Document,
            Self::Phone => IdentifierKind::Phone,
            Self::Date => IdentifierKind::BrDate,
            Self::Time => IdentifierKind::Time,
            Self::CreditCard => IdentifierKind::CreditCard,
            Self::TituloEleitor => IdentifierKind::TituloEleitor,
            Self::Cnh => IdentifierKind::Cnh,
            Self::Currency => IdentifierKind::Currency,
        }
    }

    /// Mask whatever digits are present, valid or not.
    fn mask(self, raw: &str) -> String {
        match self {
            Self::Cpf => mask::mask_cpf(raw),
            Self::Cnpj => mask::mask_cnpj(raw),
            Self::Pis => mask::mask_pis(raw),
            Self::Cep => mask::mask_cep(raw),
            Self::Document => mask::mask_cpf_cnpj(raw),
            Self::Phone => mask::mask_phone(raw),
            Self::Date => mask::mask_date(raw),
            Self::Time => mask::mask_time(raw),
            Self::CreditCard => mask::mask_credit_card(raw),
            Self::TituloEleitor => mask::mask_titulo_eleitor(raw),
            Self::Cnh => mask::mask_cnh(raw),
            Self::Currency => mask::mask_currency(raw),
        }
    }

    /// Canonical form of a valid value, or `None`.
    ///
    /// Dates and times may also be given as bare digits (`01012023`,
    /// `2359`); they are masked first, as long as no digit is dropped.
    fn format(self, raw: &str) -> Option<String> {
        let rule = self.rule();
        match self {
            Self::Date | Self::Time => rule.canonical(raw).or_else(|| {
                let masked = self.mask(raw);
                let kept_all = normalize_digits(&masked).len() == normalize_digits(raw).len();
                kept_all.then(|| rule.canonical(&masked)).flatten()
            }),
            _ => rule.canonical(raw),
        }
    }
}

/// Arguments for `dom format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    #[arg(value_enum)]
    pub kind: MaskKind,

    pub value: String,

    /// Apply the mask to partial or invalid input instead of rejecting it.
    #[arg(long)]
    pub mask_only: bool,
}

/// Outcome of checking one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub kind: IdentifierKind,
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl CheckReport {
    pub fn new(kind: IdentifierKind, input: &str) -> Self {
        let canonical = kind.canonical(input);
        let valid = kind.check(input);
        Self {
            kind,
            input: input.to_string(),
            valid,
            canonical,
            message: (!valid).then(|| kind.invalid_message()),
        }
    }
}

/// Execute `dom check`.
pub fn run_check(args: &CheckArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<CheckReport> = args
        .collect_values()?
        .iter()
        .map(|value| CheckReport::new(args.kind, value))
        .collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(kind = %args.kind, checked = reports.len(), invalid, "check finished");

    let shown = reports.iter().filter(|r| !config.only_invalid || !r.valid);
    match config.output {
        OutputFormat::Json => {
            let shown: Vec<&CheckReport> = shown.collect();
            serde_json::to_writer_pretty(&mut *out, &shown).context("writing JSON report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in shown {
                if report.valid {
                    let display = report.canonical.as_deref().unwrap_or(&report.input);
                    writeln!(out, "valid    {} {}", report.kind, display)?;
                } else {
                    writeln!(
                        out,
                        "invalid  {} {}: {}",
                        report.kind,
                        report.input,
                        report.message.unwrap_or_default()
                    )?;
                }
            }
        }
    }

    Ok(if invalid == 0 { EXIT_VALID } else { EXIT_INVALID })
}

#[derive(Debug, Serialize)]
struct NormalizedValue<'a> {
    input: &'a str,
    digits: String,
}

/// Execute `dom normalize`. Always succeeds.
pub fn run_normalize(args: &NormalizeArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let values: Vec<NormalizedValue<'_>> = args
        .values
        .iter()
        .map(|input| NormalizedValue {
            input,
            digits: normalize_digits(input),
        })
        .collect();

    match config.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &values).context("writing JSON output")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for value in &values {
                writeln!(out, "{}", value.digits)?;
            }
        }
    }
    Ok(EXIT_VALID)
}

/// Execute `dom format`.
pub fn run_format(args: &FormatArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let formatted = if args.mask_only {
        Some(args.kind.mask(&args.value))
    } else {
        args.kind.format(&args.value)
    };

    let code = if formatted.is_some() {
        EXIT_VALID
    } else {
        tracing::warn!(kind = ?args.kind, input = %args.value, "value rejected, not formatting");
        EXIT_INVALID
    };

    match (config.output, formatted) {
        (OutputFormat::Json, formatted) => {
            let doc = serde_json::json!({
                "input": args.value,
                "formatted": formatted,
            });
            serde_json::to_writer_pretty(&mut *out, &doc).context("writing JSON output")?;
            writeln!(out)?;
        }
        (OutputFormat::Text, Some(formatted)) => writeln!(out, "{formatted}")?,
        (OutputFormat::Text, None) => writeln!(
            out,
            "invalid  {}: {}",
            args.value,
            args.kind.rule().invalid_message()
        )?,
    }
    Ok(code)
}

/// Execute `dom password` on the text read from stdin. A single trailing
/// newline is not part of the password.
pub fn run_password(input: &str, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let password = input
        .strip_suffix('\n')
        .map(|p| p.strip_suffix('\r').unwrap_or(p))
        .unwrap_or(input);
    let report = check_password(password);
    tracing::info!(violations = report.violations.len(), "password checked");

    match config.output {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "valid": report.is_valid(),
                "violations": report.violations,
                "messages": report.messages(),
            });
            serde_json::to_writer_pretty(&mut *out, &doc).context("writing JSON output")?;
            writeln!(out)?;
        }
        OutputFormat::Text if report.is_valid() => writeln!(out, "valid    password")?,
        OutputFormat::Text => {
            for message in report.messages() {
                writeln!(out, "invalid  password: {message}")?;
            }
        }
    }
    Ok(if report.is_valid() { EXIT_VALID } else { EXIT_INVALID })
}

//! # Form Subcommand
//!
//! Validate registration records stored as JSON or YAML files.
//!
//! ```bash
//! dom form empregado cadastro.json
//! dom --output json form empregador fixtures/*.yaml
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use dom_forms::{
    load_record, validate_empregado, validate_empregador, EmpregadoForm, EmpregadorForm,
    FieldErrors,
};

use crate::config::{CliConfig, OutputFormat};
use crate::{EXIT_INVALID, EXIT_VALID};

/// Which registration form the files hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Empregado,
    Empregador,
}

/// Arguments for `dom form`.
#[derive(Args, Debug)]
pub struct FormArgs {
    #[arg(value_enum)]
    pub kind: FormKind,

    /// Record files (.json, .yaml, .yml).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Include the normalized record in the output of valid files.
    #[arg(long)]
    pub normalized: bool,
}

/// Validation outcome for one record file.
#[derive(Debug, Serialize)]
pub struct FormReport {
    pub file: PathBuf,
    pub kind: FormKind,
    pub valid: bool,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<serde_json::Value>,
}

/// Load and validate one record file.
pub fn validate_file(kind: FormKind, path: &Path, include_normalized: bool) -> Result<FormReport> {
    let (errors, normalized) = match kind {
        FormKind::Empregado => {
            let form: EmpregadoForm = load_record(path)
                .with_context(|| format!("loading employee record {}", path.display()))?;
            (validate_empregado(&form), serde_json::to_value(form.normalized())?)
        }
        FormKind::Empregador => {
            let form: EmpregadorForm = load_record(path)
                .with_context(|| format!("loading employer record {}", path.display()))?;
            (validate_empregador(&form), serde_json::to_value(form.normalized())?)
        }
    };
    let valid = errors.is_empty();
    tracing::debug!(file = %path.display(), valid, errors = errors.len(), "record validated");

    Ok(FormReport {
        file: path.to_path_buf(),
        kind,
        valid,
        errors,
        normalized: (valid && include_normalized).then_some(normalized),
    })
}

/// Execute `dom form`.
pub fn run_form(args: &FormArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let reports = args
        .files
        .iter()
        .map(|path| validate_file(args.kind, path, args.normalized))
        .collect::<Result<Vec<_>>>()?;
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(files = reports.len(), invalid, "form validation finished");

    let shown = reports.iter().filter(|r| !config.only_invalid || !r.valid);
    match config.output {
        OutputFormat::Json => {
            let shown: Vec<&FormReport> = shown.collect();
            serde_json::to_writer_pretty(&mut *out, &shown).context("writing JSON report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in shown {
                let status = if report.valid { "valid" } else { "invalid" };
                writeln!(out, "{status:<8} {}", report.file.display())?;
                for (field, message) in report.errors.iter() {
                    writeln!(out, "  {field}: {message}")?;
                }
                if let Some(normalized) = &report.normalized {
                    let pretty = serde_json::to_string_pretty(normalized)?;
                    writeln!(out, "{pretty}")?;
                }
            }
        }
    }

    Ok(if invalid == 0 { EXIT_VALID } else { EXIT_INVALID })
}

//! # dom CLI entry point
//!
//! Parses command-line arguments, resolves the layered configuration and
//! dispatches to subcommand handlers.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dom_cli::check::{
    run_check, run_format, run_normalize, run_password, CheckArgs, FormatArgs, NormalizeArgs,
};
use dom_cli::config::{CliConfig, OutputFormat};
use dom_cli::form::{run_form, FormArgs};
use dom_cli::EXIT_FAILURE;

/// DOM validation toolkit.
///
/// Checks Brazilian identifiers (CPF, CNPJ, PIS, CEP, UF) and validates
/// domestic-employment registration records.
#[derive(Parser, Debug)]
#[command(name = "dom", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the config file and DOM_OUTPUT.
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Print only failing entries.
    #[arg(long, global = true)]
    only_invalid: bool,

    /// Emit log events as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate values of one field kind.
    Check(CheckArgs),

    /// Print the digits-only form of each value.
    Normalize(NormalizeArgs),

    /// Print the masked canonical form of a value.
    Format(FormatArgs),

    /// Check a password, read from stdin, against the password policy.
    Password,

    /// Validate employee or employer record files.
    Form(FormArgs),
}

fn main() -> ExitCode {
    // Usage errors exit 1; clap's own default (2) means "invalid input" here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("dom CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// `RUST_LOG` wins when no `-v` is given.
fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn resolve_config(cli: &Cli) -> Result<CliConfig> {
    let mut config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.only_invalid {
        config.only_invalid = true;
    }
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn run(cli: &Cli) -> Result<u8> {
    let config = resolve_config(cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match &cli.command {
        Commands::Check(args) => run_check(args, &config, &mut out),
        Commands::Normalize(args) => run_normalize(args, &config, &mut out),
        Commands::Format(args) => run_format(args, &config, &mut out),
        Commands::Password => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading password from stdin")?;
            run_password(&input, &config, &mut out)
        }
        Commands::Form(args) => run_form(args, &config, &mut out),
    }?;
    out.flush()?;
    Ok(code)
}

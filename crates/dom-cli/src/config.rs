//! # CLI Configuration
//!
//! Output preferences for the `dom` binary. Values are layered: defaults,
//! then an optional YAML file (`--config`), then environment variables,
//! then command-line flags (applied by `main`).
//!
//! ```yaml
//! output: json
//! only_invalid: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per result.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected text or json, got {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub output: OutputFormat,
    /// Print only failing entries.
    pub only_invalid: bool,
}

impl CliConfig {
    /// Load the layered configuration. `path` is the `--config` file, if any.
    ///
    /// Variables:
    /// - `DOM_OUTPUT`: `text` or `json`
    /// - `DOM_ONLY_INVALID`: `true`/`false`/`1`/`0`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|var| std::env::var(var).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides through `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup("DOM_OUTPUT") {
            self.output = raw.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "DOM_OUTPUT",
                value: raw,
            })?;
        }
        if let Some(raw) = lookup("DOM_ONLY_INVALID") {
            self.only_invalid = parse_flag(&raw).ok_or(ConfigError::InvalidEnv {
                var: "DOM_ONLY_INVALID",
                value: raw,
            })?;
        }
        Ok(self)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

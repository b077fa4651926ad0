//! # Form Errors
//!
//! Failures while loading a registration record. Field-level problems are
//! not errors: they are reported as [`crate::FieldErrors`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a record from disk or text.
#[derive(Error, Debug)]
pub enum FormError {
    /// The file extension does not map to a supported record format.
    #[error("unsupported record format for {path}: expected .json, .yaml or .yml")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// I/O error while reading the record.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON record could not be decoded.
    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML record could not be decoded.
    #[error("invalid YAML record: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

//! # Record Loading
//!
//! Registration records arrive as JSON (the web client's payload) or YAML
//! (hand-written fixtures). The format is chosen by file extension.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Serialization format of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// Pick the format from the path extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, FormError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(FormError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Decode a record from text in the given format.
pub fn parse_record<T: DeserializeOwned>(text: &str, format: RecordFormat) -> Result<T, FormError> {
    match format {
        RecordFormat::Json => Ok(serde_json::from_str(text)?),
        RecordFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

/// Read and decode a record file.
pub fn load_record<T: DeserializeOwned>(path: &Path) -> Result<T, FormError> {
    let format = RecordFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading record");
    parse_record(&text, format)
}

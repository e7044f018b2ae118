//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading captures and symbol stores
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No process matching '{selector}' in capture {capture}")]
    ProcessNotFound { selector: String, capture: PathBuf },

    #[error("Invalid capture format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while diffing two aggregates
#[derive(Error, Debug, PartialEq)]
pub enum DiffError {
    #[error(
        "Baseline trace has zero total cost (source total {source_total}); growth ratio is undefined"
    )]
    ZeroBaselineTotal { source_total: f64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

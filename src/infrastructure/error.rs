//! Infrastructure-level errors: source reading and sink writing

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported file type: .{extension}. Supported: .csv, .xlsx, .xlsm, .xlsb")]
    UnsupportedFormat { extension: String },

    #[error("No sheet with a header row and data found in: {0}")]
    EmptySource(PathBuf),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("Failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid tree file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

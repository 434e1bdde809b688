//! Error types for conversions and dataset loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::field::CodeField;

/// Errors produced by a code conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// No record carries `value` in the searched field.
    #[error("Country not found for {field} {value}")]
    NotFound { field: CodeField, value: String },
}

impl ConvertError {
    pub(crate) fn not_found(field: CodeField, value: impl Into<String>) -> Self {
        Self::NotFound {
            field,
            value: value.into(),
        }
    }
}

/// Errors that can occur when building a country table from a dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    /// Dataset file could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("Failed to parse CSV in {source_name}: {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },

    /// Malformed world-countries JSON content.
    #[error("Failed to parse JSON in {source_name}: {message}")]
    JsonParse {
        source_name: String,
        message: String,
    },

    /// File extension is neither `.csv` nor `.json`.
    #[error("Unsupported dataset format: {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for dataset loading operations.
pub type Result<T> = std::result::Result<T, TableError>;

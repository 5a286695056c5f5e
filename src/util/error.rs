//! Unified error types for quakeprep.
//!
//! Every fatal condition in a run returns `Result<T, PrepError>`. Record-local
//! failures during enrichment are not errors; they are reported as
//! [`crate::core::enrich::Discard`] reasons instead.

use std::path::PathBuf;

/// Unified error type used throughout quakeprep.
///
/// Each variant carries enough context to tell the operator which input needs
/// fixing before the batch is rerun.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// A required input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The tabular structure of an input file could not be read.
    #[error("Malformed CSV input: {0}")]
    Csv(String),

    /// A row is shorter than the column the loader needs.
    #[error("{source_name} line {line}: missing column {column}")]
    MissingColumn {
        /// Which input the row came from (e.g. `"events"`).
        source_name: &'static str,
        /// 1-based line number of the offending row.
        line: u64,
        /// 0-based column index that was expected.
        column: usize,
    },

    /// A latitude or longitude field is not a decimal number.
    #[error("Invalid coordinate '{value}' on line {line}")]
    Coordinate {
        /// The raw field text.
        value: String,
        /// 1-based line number of the offending row.
        line: u64,
    },

    /// An event timestamp does not match the expected ISO 8601 layout.
    #[error("Invalid event timestamp '{value}': {reason}")]
    Timestamp {
        /// The raw timestamp text.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A reference JSON file could not be parsed or serialised.
    #[error("JSON error: {0}")]
    Json(String),

    /// A reference JSON document lacks a key the normalizer requires.
    #[error("Reference file error: {0}")]
    Reference(String),

    /// Writing an output file failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrepError>;

impl From<csv::Error> for PrepError {
    fn from(e: csv::Error) -> Self {
        PrepError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for PrepError {
    fn from(e: serde_json::Error) -> Self {
        PrepError::Json(e.to_string())
    }
}

/// Build a [`PrepError::MissingColumn`] for the given input and position.
pub fn missing_column(source_name: &'static str, line: u64, column: usize) -> PrepError {
    PrepError::MissingColumn {
        source_name,
        line,
        column,
    }
}

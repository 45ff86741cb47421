//! Error types for reference table loading.
//!
//! Only the table loader returns `Err`: the calculators themselves never
//! fail, they accumulate human-readable notices on the result record.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reference table loading.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Table file not found: {path}")]
    TableNotFound { path: PathBuf },

    #[error("Table '{table}' is empty")]
    EmptyTable { table: String },

    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Invalid numeric value in table '{table}' row {row}: '{value}'")]
    InvalidNumber {
        table: String,
        row: usize,
        value: String,
    },

    #[error("Invalid fraction value in table '{table}' row {row}: '{value}' is not an eighth of an inch")]
    InvalidFraction {
        table: String,
        row: usize,
        value: String,
    },

    #[error("CSV error in table '{table}': {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for table loading operations.
pub type Result<T> = std::result::Result<T, TableError>;

//! Error types for Curator
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Only ingestion and configuration fail. Scoring never errors: malformed
//! numeric fields, blank queries and empty candidate sets are all ordinary
//! (empty) outcomes.

use crate::limits::LimitError;
use std::io;
use thiserror::Error;

/// Result type alias for Curator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Curator
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading source tables or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A column the corpus cannot be built without is absent
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn {
        /// Table name
        table: String,
        /// Column name
        column: String,
    },

    /// A size limit was exceeded
    #[error("Limit exceeded ({what}): {actual} exceeds maximum {max}")]
    LimitExceeded {
        /// What was measured (e.g. "templates", "query_bytes")
        what: String,
        /// Measured size
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    /// Invalid argument from the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a `MissingColumn` error
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Error::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Build an `InvalidInput` error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        match e {
            LimitError::TooManyTemplates { actual, max } => Error::LimitExceeded {
                what: "templates".to_string(),
                actual,
                max,
            },
            LimitError::QueryTooLong { actual, max } => Error::LimitExceeded {
                what: "query_bytes".to_string(),
                actual,
                max,
            },
        }
    }
}

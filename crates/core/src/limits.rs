//! Size limits for corpora and queries
//!
//! These bound the work a single catalog build or query can do so that
//! per-query latency stays predictable. Violations at build time are fatal;
//! violations at query time reject the query.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size limits for catalogs and queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of unique templates in one catalog (default: 100,000)
    pub max_templates: usize,

    /// Maximum candidates scored per query (default: 100,000)
    ///
    /// Candidates beyond this bound are skipped and the response is
    /// marked truncated.
    pub max_candidates: usize,

    /// Maximum query length in bytes (default: 4096)
    pub max_query_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_templates: 100_000,
            max_candidates: 100_000,
            max_query_bytes: 4096,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_templates: 10,
            max_candidates: 5,
            max_query_bytes: 64,
        }
    }

    /// Validate the number of templates in a corpus
    pub fn validate_corpus_size(&self, templates: usize) -> Result<(), LimitError> {
        if templates > self.max_templates {
            return Err(LimitError::TooManyTemplates {
                actual: templates,
                max: self.max_templates,
            });
        }
        Ok(())
    }

    /// Validate a raw query string
    pub fn validate_query(&self, query: &str) -> Result<(), LimitError> {
        let len = query.len();
        if len > self.max_query_bytes {
            return Err(LimitError::QueryTooLong {
                actual: len,
                max: self.max_query_bytes,
            });
        }
        Ok(())
    }
}

/// Limit validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Corpus holds more templates than allowed
    #[error("Too many templates: {actual} exceeds maximum {max}")]
    TooManyTemplates {
        /// Actual template count
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Query exceeds maximum length
    #[error("Query too long: {actual} bytes exceeds maximum {max}")]
    QueryTooLong {
        /// Actual query length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl LimitError {
    /// Short reason code, suitable for logs and JSON output
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::TooManyTemplates { .. } => "too_many_templates",
            LimitError::QueryTooLong { .. } => "query_too_long",
        }
    }
}

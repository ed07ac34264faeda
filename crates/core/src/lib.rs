//! Core types for Curator
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: Error type hierarchy
//! - Limits: corpus and query size limits
//! - Table / Row / RawTables: the tabular input boundary
//! - TemplateRecord / ClientProfile: catalog records
//! - Search types: SearchRequest, SearchResponse, Recommendation, MatchReason

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod records;
pub mod search_types;
pub mod table;

// Re-export commonly used types
pub use error::{Error, Result};
pub use limits::{LimitError, Limits};
pub use records::{ClientProfile, TemplateRecord};
pub use search_types::{
    MatchReason, Recommendation, SearchRequest, SearchResponse, SearchStats, DEFAULT_TOP_K,
};
pub use table::{RawTables, Row, Table};

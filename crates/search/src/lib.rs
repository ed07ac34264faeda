//! Search infrastructure for Curator
//!
//! This crate provides:
//! - Tokenizer: the single normalization pipeline for text and queries
//! - SearchIndex: word → template-id inverted index
//! - ContextDetector: maps a query onto a client profile
//! - Scorer trait and OverlapScorer default implementation
//! - Ranker trait and ScoreRanker default implementation
//! - SearchSnapshot: immutable templates + index + detector
//! - TemplateSearch: the per-query orchestrator
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use curator_core::{ClientProfile, SearchRequest, TemplateRecord};
//! use curator_search::{ContextPolicy, SearchSnapshot, TemplateSearch};
//!
//! let templates = vec![Arc::new(
//!     TemplateRecord::new("Spin Wheel", "").with_searchable_text("spin wheel gaming offer"),
//! )];
//! let profiles = vec![ClientProfile::new("Gaming", "mobile gaming app")];
//! let snapshot = SearchSnapshot::build(templates, &profiles, ContextPolicy::FirstMatch);
//!
//! let response = TemplateSearch::new()
//!     .search(&snapshot, &SearchRequest::new("gaming"))
//!     .unwrap();
//! assert_eq!(response.names(), vec!["Spin Wheel"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod index;
pub mod ranker;
pub mod scorer;
pub mod snapshot;
pub mod template_search;
pub mod tokenizer;

// Re-export commonly used types
pub use context::{ContextDetector, ContextPolicy, QueryContext};
pub use index::{Candidates, PostingList, SearchIndex, TemplateId};
pub use ranker::{RankedResult, Ranker, ScoreRanker};
pub use scorer::{CandidateScore, OverlapScorer, ScoreWeights, Scorer};
pub use snapshot::SearchSnapshot;
pub use template_search::TemplateSearch;
pub use tokenizer::{normalize, tokenize, word_set};

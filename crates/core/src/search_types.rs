//! Core search types for template recommendation
//!
//! This module defines the request/response contract of the search core:
//! - SearchRequest: free-text query plus top-k
//! - Recommendation: one ranked template with its score breakdown
//! - MatchReason: structured explanation of why a template matched
//! - SearchStats: execution statistics for debugging/monitoring
//! - SearchResponse: ranked recommendations plus metadata

use crate::records::TemplateRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default number of recommendations returned
pub const DEFAULT_TOP_K: usize = 20;

// ============================================================================
// SearchRequest
// ============================================================================

/// Request for template recommendations
///
/// # Example
///
/// ```
/// use curator_core::search_types::SearchRequest;
///
/// let req = SearchRequest::new("gaming app launch").with_top_k(5);
/// assert_eq!(req.query, "gaming app launch");
/// assert_eq!(req.top_k, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,

    /// Maximum results to return
    pub top_k: usize,
}

impl SearchRequest {
    /// Create a request with the default top-k (20)
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Builder: set top-k results count
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// True when the query is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

// ============================================================================
// MatchReason
// ============================================================================

/// Why a template matched a query
///
/// One reason per matching category. Terms are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum MatchReason {
    /// Template shares vocabulary with the detected client profile
    Context {
        /// Client type label of the detected profile
        profile: String,
        /// Context keywords found in the template
        terms: Vec<String>,
    },
    /// Template contains query words outside the context vocabulary
    DirectMatch {
        /// Query words found in the template
        terms: Vec<String>,
    },
}

impl MatchReason {
    /// Matched terms of this reason
    pub fn terms(&self) -> &[String] {
        match self {
            MatchReason::Context { terms, .. } | MatchReason::DirectMatch { terms } => terms,
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Context { profile, terms } => {
                write!(f, "matches context profile {} ({})", profile, terms.join(", "))
            }
            MatchReason::DirectMatch { terms } => {
                write!(f, "matches query term: {}", terms.join(", "))
            }
        }
    }
}

// ============================================================================
// Recommendation
// ============================================================================

/// A single ranked template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Rank in result set (1-indexed)
    pub rank: u32,

    /// The recommended template (shared with the catalog)
    pub template: Arc<TemplateRecord>,

    /// Final score: weighted relevance plus weighted performance
    pub score: f64,

    /// Weighted count of context keyword overlaps
    pub context_score: f64,

    /// Weighted count of general query keyword overlaps
    pub direct_score: f64,

    /// Historical CTR used as the performance signal
    pub performance_score: f64,

    /// Structured match explanations
    pub reasons: Vec<MatchReason>,
}

impl Recommendation {
    /// Template name
    pub fn name(&self) -> &str {
        &self.template.name
    }

    /// Context plus direct score
    pub fn relevance(&self) -> f64 {
        self.context_score + self.direct_score
    }

    /// Rendered reasons joined with "; "
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ============================================================================
// SearchStats
// ============================================================================

/// Execution statistics for a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Time spent in search (microseconds)
    pub elapsed_micros: u64,

    /// Candidates retrieved from the index and scored
    pub candidates_considered: usize,

    /// Version of the catalog that served the query
    pub catalog_version: u64,
}

impl SearchStats {
    /// Create new SearchStats
    pub fn new(elapsed_micros: u64, candidates: usize) -> Self {
        SearchStats {
            elapsed_micros,
            candidates_considered: candidates,
            catalog_version: 0,
        }
    }

    /// Builder: set catalog version
    pub fn with_catalog_version(mut self, version: u64) -> Self {
        self.catalog_version = version;
        self
    }
}

// ============================================================================
// SearchResponse
// ============================================================================

/// Ranked recommendations plus execution metadata
///
/// # Invariants
///
/// - `hits` are ordered by non-increasing `score`
/// - no two hits share a template name
/// - `hits.len() <= top_k` of the request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked hits (highest score first)
    pub hits: Vec<Recommendation>,

    /// Client type label of the detected context, if any
    pub context: Option<String>,

    /// True if results were cut at top-k or the candidate limit
    pub truncated: bool,

    /// Execution statistics
    pub stats: SearchStats,
}

impl SearchResponse {
    /// Create an empty response
    pub fn empty() -> Self {
        SearchResponse::default()
    }

    /// Check if response has no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Get number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Template names in rank order
    pub fn names(&self) -> Vec<&str> {
        self.hits.iter().map(Recommendation::name).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_hit(name: &str, context: f64, direct: f64, reasons: Vec<MatchReason>) -> Recommendation {
        Recommendation {
            rank: 1,
            template: Arc::new(TemplateRecord::new(name, "")),
            score: 0.9 * (context + direct),
            context_score: context,
            direct_score: direct,
            performance_score: 0.0,
            reasons,
        }
    }

    #[test]
    fn test_search_request_defaults() {
        let req = SearchRequest::new("fashion");
        assert_eq!(req.top_k, DEFAULT_TOP_K);
        assert!(!req.is_blank());
    }

    #[test]
    fn test_search_request_blank() {
        assert!(SearchRequest::new("").is_blank());
        assert!(SearchRequest::new(" \t\n ").is_blank());
    }

    #[test]
    fn test_match_reason_display() {
        let ctx = MatchReason::Context {
            profile: "Gaming".into(),
            terms: vec!["app".into(), "gaming".into()],
        };
        let direct = MatchReason::DirectMatch {
            terms: vec!["launch".into()],
        };

        assert_eq!(ctx.to_string(), "matches context profile Gaming (app, gaming)");
        assert_eq!(direct.to_string(), "matches query term: launch");
        assert_eq!(direct.terms(), ["launch".to_string()]);
    }

    #[test]
    fn test_match_reason_serializes_tagged() {
        let reason = MatchReason::DirectMatch {
            terms: vec!["sale".into()],
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["category"], "direct_match");
        assert_eq!(json["terms"][0], "sale");
    }

    #[test]
    fn test_reason_text_joins_categories() {
        let hit = make_hit(
            "T1",
            20.0,
            10.0,
            vec![
                MatchReason::Context {
                    profile: "Gaming".into(),
                    terms: vec!["gaming".into()],
                },
                MatchReason::DirectMatch {
                    terms: vec!["launch".into()],
                },
            ],
        );

        assert_eq!(
            hit.reason_text(),
            "matches context profile Gaming (gaming); matches query term: launch"
        );
        assert!((hit.relevance() - 30.0).abs() < f64::EPSILON);
        assert_eq!(hit.name(), "T1");
    }

    #[test]
    fn test_search_response_empty() {
        let response = SearchResponse::empty();
        assert!(response.is_empty());
        assert_eq!(response.len(), 0);
        assert!(response.context.is_none());
        assert!(!response.truncated);
    }

    #[test]
    fn test_search_stats_builder() {
        let stats = SearchStats::new(120, 7).with_catalog_version(3);
        assert_eq!(stats.candidates_considered, 7);
        assert_eq!(stats.catalog_version, 3);
    }
}

//! Scoring infrastructure for template search
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - ScoreWeights for the overlap formula
//! - CandidateScore per-template score breakdown
//! - OverlapScorer default implementation

use crate::context::QueryContext;
use curator_core::search_types::MatchReason;
use curator_core::TemplateRecord;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// ScoreWeights
// ============================================================================

/// Weights of the overlap scoring formula
///
/// ```text
/// context_score = context     × |context words ∩ template words|
/// direct_score  = direct      × |general words ∩ template words|
/// final_score   = relevance   × (context_score + direct_score)
///               + performance × CTR
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Points per matched context keyword (default 20)
    pub context: f64,
    /// Points per matched general query keyword (default 10)
    pub direct: f64,
    /// Share of relevance in the final score (default 0.90)
    pub relevance: f64,
    /// Share of CTR in the final score (default 0.10)
    pub performance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            context: 20.0,
            direct: 10.0,
            relevance: 0.90,
            performance: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Check that every weight is finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.context, self.direct, self.relevance, self.performance]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

// ============================================================================
// CandidateScore
// ============================================================================

/// Score breakdown for one candidate template
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    /// Final score
    pub score: f64,
    /// Context component
    pub context_score: f64,
    /// Direct-match component
    pub direct_score: f64,
    /// Performance signal (CTR)
    pub performance_score: f64,
    /// One reason per matching category
    pub reasons: Vec<MatchReason>,
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers receive a candidate template, its unique normalized words and
/// the decomposed query. They return `None` for candidates that must be
/// dropped.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so a catalog can be queried concurrently.
pub trait Scorer: Send + Sync {
    /// Score a template against a decomposed query
    fn score(
        &self,
        template: &TemplateRecord,
        terms: &FxHashSet<String>,
        query: &QueryContext,
    ) -> Option<CandidateScore>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// OverlapScorer
// ============================================================================

/// Keyword-overlap scorer with a CTR tie-breaker
///
/// Templates with zero relevance are dropped even when they were retrieved,
/// so CTR alone never makes a template match.
#[derive(Debug, Clone, Default)]
pub struct OverlapScorer {
    weights: ScoreWeights,
}

impl OverlapScorer {
    /// Create a scorer with custom weights
    pub fn new(weights: ScoreWeights) -> Self {
        OverlapScorer { weights }
    }

    /// Active weights
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

fn matched_terms(words: &BTreeSet<String>, terms: &FxHashSet<String>) -> Vec<String> {
    words.iter().filter(|w| terms.contains(*w)).cloned().collect()
}

impl Scorer for OverlapScorer {
    fn score(
        &self,
        template: &TemplateRecord,
        terms: &FxHashSet<String>,
        query: &QueryContext,
    ) -> Option<CandidateScore> {
        let context_matches = matched_terms(&query.context_words, terms);
        let direct_matches = matched_terms(&query.general_words, terms);

        let context_score = self.weights.context * context_matches.len() as f64;
        let direct_score = self.weights.direct * direct_matches.len() as f64;
        let relevance = context_score + direct_score;
        if relevance <= 0.0 {
            return None;
        }

        let performance_score = template.avg_ctr;
        let score = self.weights.relevance * relevance + self.weights.performance * performance_score;

        let mut reasons = Vec::with_capacity(2);
        if !context_matches.is_empty() {
            reasons.push(MatchReason::Context {
                profile: query.primary.clone().unwrap_or_default(),
                terms: context_matches,
            });
        }
        if !direct_matches.is_empty() {
            reasons.push(MatchReason::DirectMatch {
                terms: direct_matches,
            });
        }

        Some(CandidateScore {
            score,
            context_score,
            direct_score,
            performance_score,
            reasons,
        })
    }

    fn name(&self) -> &str {
        "overlap"
    }
}

// ============================================================================
// Tests
// ============================================================================

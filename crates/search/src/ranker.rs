//! Ranking infrastructure for scored candidates
//!
//! This module provides:
//! - Ranker trait for pluggable ordering/dedup algorithms
//! - ScoreRanker: sort by score, dedup by template name, take top-k
//! - RankedResult: final ranked hits plus truncation flag

use crate::scorer::CandidateScore;
use curator_core::search_types::Recommendation;
use curator_core::TemplateRecord;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::Arc;

// ============================================================================
// RankedResult
// ============================================================================

/// Result of ranking scored candidates
#[derive(Debug, Clone, Default)]
pub struct RankedResult {
    /// Final ranked list of hits
    pub hits: Vec<Recommendation>,
    /// Whether more unique templates scored than were returned
    pub truncated: bool,
}

impl RankedResult {
    /// Create a new RankedResult
    pub fn new(hits: Vec<Recommendation>, truncated: bool) -> Self {
        RankedResult { hits, truncated }
    }
}

// ============================================================================
// Ranker Trait
// ============================================================================

/// Pluggable ranking interface
///
/// Rankers take scored candidates in retrieval order and return at most
/// `k` recommendations, highest score first, one per template name.
///
/// # Thread Safety
///
/// Rankers must be Send + Sync for concurrent search operations.
pub trait Ranker: Send + Sync {
    /// Order, deduplicate and truncate scored candidates
    fn rank(&self, scored: Vec<(Arc<TemplateRecord>, CandidateScore)>, k: usize) -> RankedResult;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// ScoreRanker (default)
// ============================================================================

/// Sort by final score descending, ties by template name ascending
///
/// The sort is stable, so candidates equal on both keys keep their
/// retrieval order. After sorting, only the first occurrence of each
/// template name is kept.
#[derive(Debug, Clone, Default)]
pub struct ScoreRanker;

impl ScoreRanker {
    /// Create a new ScoreRanker
    pub fn new() -> Self {
        ScoreRanker
    }
}

fn compare(
    a: &(Arc<TemplateRecord>, CandidateScore),
    b: &(Arc<TemplateRecord>, CandidateScore),
) -> Ordering {
    b.1.score
        .total_cmp(&a.1.score)
        .then_with(|| a.0.name.cmp(&b.0.name))
}

impl Ranker for ScoreRanker {
    fn rank(
        &self,
        mut scored: Vec<(Arc<TemplateRecord>, CandidateScore)>,
        k: usize,
    ) -> RankedResult {
        scored.sort_by(compare);

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut hits = Vec::with_capacity(k.min(scored.len()));
        let mut truncated = false;

        for (template, s) in scored {
            if seen.contains(&template.name) {
                continue;
            }
            if hits.len() >= k {
                truncated = true;
                break;
            }
            seen.insert(template.name.clone());
            hits.push(Recommendation {
                rank: (hits.len() + 1) as u32,
                template,
                score: s.score,
                context_score: s.context_score,
                direct_score: s.direct_score,
                performance_score: s.performance_score,
                reasons: s.reasons,
            });
        }

        RankedResult::new(hits, truncated)
    }

    fn name(&self) -> &str {
        "score"
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Search orchestrator
//!
//! ```text
//! SearchRequest
//!      │
//!      ▼
//! ┌──────────────────────────────────────────┐
//! │              TemplateSearch              │
//! │  blank? ──► empty response               │
//! │  ContextDetector::detect                 │
//! │      │  query / context / general words  │
//! │      ▼                                   │
//! │  SearchIndex::candidates                 │
//! │      │  ids                              │
//! │      ▼                                   │
//! │  Scorer::score (per candidate)           │
//! │      │                                   │
//! │      ▼                                   │
//! │  Ranker::rank (sort, dedup, top-k)       │
//! └──────┼───────────────────────────────────┘
//!        ▼
//!  SearchResponse
//! ```
//!
//! TemplateSearch is STATELESS. It holds only the scorer, the ranker and the
//! limits; all per-query state lives on the stack of `search`.

use crate::ranker::{Ranker, ScoreRanker};
use crate::scorer::{OverlapScorer, Scorer};
use crate::snapshot::SearchSnapshot;
use curator_core::search_types::{SearchRequest, SearchResponse, SearchStats};
use curator_core::{Limits, Result};
use std::sync::Arc;
use std::time::Instant;

/// Query orchestrator over a SearchSnapshot
#[derive(Clone)]
pub struct TemplateSearch {
    scorer: Arc<dyn Scorer>,
    ranker: Arc<dyn Ranker>,
    limits: Limits,
}

impl Default for TemplateSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateSearch")
            .field("scorer", &self.scorer.name())
            .field("ranker", &self.ranker.name())
            .field("limits", &self.limits)
            .finish()
    }
}

impl TemplateSearch {
    /// Create an orchestrator with OverlapScorer, ScoreRanker and default limits
    pub fn new() -> Self {
        TemplateSearch {
            scorer: Arc::new(OverlapScorer::default()),
            ranker: Arc::new(ScoreRanker),
            limits: Limits::default(),
        }
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: set custom ranker
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    /// Builder: set limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Active limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Rank the snapshot's templates for a request
    ///
    /// Blank queries, queries with no retrievable words and queries whose
    /// candidates all score zero return an empty response. The only error
    /// is a query longer than `limits.max_query_bytes`.
    pub fn search(&self, snapshot: &SearchSnapshot, req: &SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();
        let version = snapshot.version();

        if req.is_blank() {
            return Ok(empty_response(start, version));
        }
        self.limits.validate_query(&req.query)?;

        // 1. Decompose the query
        let query = snapshot.detector().detect(&req.query);
        if query.is_empty() {
            return Ok(empty_response(start, version));
        }

        // 2. Retrieve candidates
        let candidates = snapshot
            .index()
            .candidates(query.retrieval_words(), self.limits.max_candidates);

        // 3. Score
        let mut scored = Vec::with_capacity(candidates.ids.len());
        for id in &candidates.ids {
            let (Some(template), Some(terms)) = (snapshot.get(*id), snapshot.index().doc_terms(*id))
            else {
                continue;
            };
            if let Some(s) = self.scorer.score(template, terms, &query) {
                scored.push((Arc::clone(template), s));
            }
        }
        let matched = scored.len();

        // 4. Rank
        let ranked = self.ranker.rank(scored, req.top_k);

        let stats = SearchStats::new(start.elapsed().as_micros() as u64, candidates.ids.len())
            .with_catalog_version(version);

        tracing::debug!(
            target: "curator::search",
            query = %req.query,
            context = ?query.primary,
            candidates = candidates.ids.len(),
            matched,
            hits = ranked.hits.len(),
            elapsed_micros = stats.elapsed_micros,
            "Template search complete"
        );

        Ok(SearchResponse {
            hits: ranked.hits,
            context: query.primary,
            truncated: ranked.truncated || candidates.truncated,
            stats,
        })
    }
}

fn empty_response(start: Instant, version: u64) -> SearchResponse {
    SearchResponse {
        stats: SearchStats::new(start.elapsed().as_micros() as u64, 0).with_catalog_version(version),
        ..SearchResponse::empty()
    }
}

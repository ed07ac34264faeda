//! Property tests for ranking invariants
//!
//! Random corpora drawn from a small vocabulary (so overlaps are common)
//! and a small name pool (so duplicate names occur).

use curator_core::{ClientProfile, SearchRequest, TemplateRecord};
use curator_search::{ContextPolicy, SearchSnapshot, TemplateSearch};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

const VOCAB: &[&str] = &[
    "gaming", "mobile", "app", "launch", "banking", "credit", "card", "fashion", "sale", "shoes",
    "quiz", "video", "spin", "wheel",
];

const NAMES: &[&str] = &["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..6).prop_map(|w| w.join(" "))
}

fn templates() -> impl Strategy<Value = Vec<Arc<TemplateRecord>>> {
    prop::collection::vec(
        (prop::sample::select(NAMES), 0.0f64..20.0, text()),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(name, ctr, text)| {
                Arc::new(
                    TemplateRecord::new(name, "")
                        .with_ctr(ctr)
                        .with_searchable_text(text),
                )
            })
            .collect()
    })
}

fn profiles() -> impl Strategy<Value = Vec<ClientProfile>> {
    prop::collection::vec(
        (prop::sample::select(NAMES), text()).prop_map(|(label, kw)| ClientProfile::new(label, kw)),
        0..4,
    )
}

fn policy() -> impl Strategy<Value = ContextPolicy> {
    prop_oneof![Just(ContextPolicy::FirstMatch), Just(ContextPolicy::BestOverlap)]
}

proptest! {
    #[test]
    fn ranked_output_invariants(
        templates in templates(),
        profiles in profiles(),
        policy in policy(),
        query in text(),
        top_k in 1usize..8,
    ) {
        let snapshot = SearchSnapshot::build(templates, &profiles, policy);
        let response = TemplateSearch::new()
            .search(&snapshot, &SearchRequest::new(query).with_top_k(top_k))
            .unwrap();

        prop_assert!(response.len() <= top_k);

        for pair in response.hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }

        let unique: HashSet<&str> = response.names().into_iter().collect();
        prop_assert_eq!(unique.len(), response.len());

        for hit in &response.hits {
            prop_assert!(hit.relevance() > 0.0);
        }
    }

    #[test]
    fn absent_words_never_match(
        templates in templates(),
        profiles in profiles(),
        suffix in 0u32..1000,
    ) {
        let snapshot = SearchSnapshot::build(templates, &profiles, ContextPolicy::FirstMatch);
        let query = format!("xyzzy{} nonexistent{}", suffix, suffix);
        let response = TemplateSearch::new()
            .search(&snapshot, &SearchRequest::new(query))
            .unwrap();

        prop_assert!(response.is_empty());
        prop_assert!(response.context.is_none());
    }

    #[test]
    fn search_is_idempotent(
        templates in templates(),
        profiles in profiles(),
        query in text(),
    ) {
        let snapshot = SearchSnapshot::build(templates, &profiles, ContextPolicy::FirstMatch);
        let search = TemplateSearch::new();
        let req = SearchRequest::new(query);

        let first = search.search(&snapshot, &req).unwrap();
        let second = search.search(&snapshot, &req).unwrap();

        prop_assert_eq!(first.names(), second.names());
        let s1: Vec<f64> = first.hits.iter().map(|h| h.score).collect();
        let s2: Vec<f64> = second.hits.iter().map(|h| h.score).collect();
        prop_assert_eq!(s1, s2);
    }
}

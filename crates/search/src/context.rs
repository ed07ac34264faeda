//! Query context detection
//!
//! A query's *context* is the client profile whose descriptive vocabulary
//! overlaps the query. Once detected, the profile's whole vocabulary becomes
//! the context keyword set and the remaining query words are "general".
//!
//! Two policies:
//! - `FirstMatch`: the first profile in corpus order with any overlap wins.
//!   Later profiles are never examined, even with a larger overlap.
//! - `BestOverlap`: the profile with the largest overlap wins; ties go to
//!   the earliest profile.

use crate::tokenizer::word_set;
use curator_core::records::ClientProfile;
use curator_core::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ContextPolicy
// ============================================================================

/// How the primary context is chosen among matching profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextPolicy {
    /// First profile in corpus order with a non-empty overlap
    #[default]
    FirstMatch,
    /// Profile with the largest overlap, earliest on ties
    BestOverlap,
}

impl ContextPolicy {
    /// Config-file spelling of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextPolicy::FirstMatch => "first_match",
            ContextPolicy::BestOverlap => "best_overlap",
        }
    }
}

impl fmt::Display for ContextPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_match" => Ok(ContextPolicy::FirstMatch),
            "best_overlap" => Ok(ContextPolicy::BestOverlap),
            other => Err(Error::invalid_input(format!(
                "unknown context policy '{}', expected \"first_match\" or \"best_overlap\"",
                other
            ))),
        }
    }
}

// ============================================================================
// QueryContext
// ============================================================================

/// Decomposition of a query against the profile corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    /// Normalized unique query words
    pub query_words: BTreeSet<String>,
    /// Client type label of the detected profile
    pub primary: Option<String>,
    /// Full normalized vocabulary of the detected profile
    pub context_words: BTreeSet<String>,
    /// Query words not in the context vocabulary
    pub general_words: BTreeSet<String>,
}

impl QueryContext {
    /// Words used for candidate retrieval: query ∪ context, sorted
    pub fn retrieval_words(&self) -> BTreeSet<&str> {
        self.query_words
            .iter()
            .chain(self.context_words.iter())
            .map(String::as_str)
            .collect()
    }

    /// True when the query normalized to nothing
    pub fn is_empty(&self) -> bool {
        self.query_words.is_empty()
    }
}

// ============================================================================
// ContextDetector
// ============================================================================

#[derive(Debug, Clone)]
struct ProfileVocabulary {
    label: String,
    words: BTreeSet<String>,
}

/// Detects the client profile a query is about
///
/// Profile vocabularies are normalized once at construction; detection only
/// intersects sets.
#[derive(Debug, Clone, Default)]
pub struct ContextDetector {
    profiles: Vec<ProfileVocabulary>,
    policy: ContextPolicy,
}

impl ContextDetector {
    /// Build a detector over profiles in corpus order
    pub fn new(profiles: &[ClientProfile], policy: ContextPolicy) -> Self {
        let profiles = profiles
            .iter()
            .map(|p| ProfileVocabulary {
                label: p.client_type.clone(),
                words: word_set(&p.descriptive_text()),
            })
            .collect();
        ContextDetector { profiles, policy }
    }

    /// Active policy
    pub fn policy(&self) -> ContextPolicy {
        self.policy
    }

    /// Number of profiles considered
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Detect the context of a raw query string
    ///
    /// # Example
    ///
    /// ```
    /// use curator_core::ClientProfile;
    /// use curator_search::context::{ContextDetector, ContextPolicy};
    ///
    /// let profiles = vec![ClientProfile::new("Gaming", "mobile gaming app")];
    /// let detector = ContextDetector::new(&profiles, ContextPolicy::FirstMatch);
    ///
    /// let ctx = detector.detect("gaming launch");
    /// assert_eq!(ctx.primary.as_deref(), Some("Gaming"));
    /// assert!(ctx.general_words.contains("launch"));
    /// ```
    pub fn detect(&self, query: &str) -> QueryContext {
        self.detect_words(word_set(query))
    }

    /// Detect the context of an already-normalized word set
    pub fn detect_words(&self, query_words: BTreeSet<String>) -> QueryContext {
        let matched = match self.policy {
            ContextPolicy::FirstMatch => self
                .profiles
                .iter()
                .find(|p| overlap(&p.words, &query_words) > 0),
            ContextPolicy::BestOverlap => {
                let mut best: Option<(&ProfileVocabulary, usize)> = None;
                for profile in &self.profiles {
                    let n = overlap(&profile.words, &query_words);
                    if n > 0 && best.map_or(true, |(_, b)| n > b) {
                        best = Some((profile, n));
                    }
                }
                best.map(|(p, _)| p)
            }
        };

        match matched {
            Some(profile) => {
                let general_words = query_words
                    .difference(&profile.words)
                    .cloned()
                    .collect();
                QueryContext {
                    query_words,
                    primary: Some(profile.label.clone()),
                    context_words: profile.words.clone(),
                    general_words,
                }
            }
            None => QueryContext {
                general_words: query_words.clone(),
                query_words,
                primary: None,
                context_words: BTreeSet::new(),
            },
        }
    }
}

fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    a.intersection(b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> Vec<ClientProfile> {
        vec![
            ClientProfile::new("Gaming", "mobile gaming app"),
            ClientProfile::new("Fintech", "banking app credit card loans"),
            ClientProfile::new("Retail", "fashion shoes sale"),
        ]
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_detects_first_matching_profile() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::FirstMatch);
        let ctx = detector.detect("gaming app");

        assert_eq!(ctx.primary.as_deref(), Some("Gaming"));
        assert_eq!(ctx.context_words, set(&["app", "gaming", "mobile"]));
        assert!(ctx.general_words.is_empty());
    }

    #[test]
    fn test_first_match_ignores_better_later_profile() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::FirstMatch);
        // "app" hits Gaming first even though Fintech overlaps on three words
        let ctx = detector.detect("banking credit app");

        assert_eq!(ctx.primary.as_deref(), Some("Gaming"));
        assert_eq!(ctx.general_words, set(&["banking", "credit"]));
    }

    #[test]
    fn test_best_overlap_picks_largest() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::BestOverlap);
        let ctx = detector.detect("banking credit app");

        assert_eq!(ctx.primary.as_deref(), Some("Fintech"));
        assert!(ctx.general_words.is_empty());
    }

    #[test]
    fn test_best_overlap_tie_goes_to_earliest() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::BestOverlap);
        let ctx = detector.detect("app");
        assert_eq!(ctx.primary.as_deref(), Some("Gaming"));
    }

    #[test]
    fn test_no_match_keeps_all_words_general() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::FirstMatch);
        let ctx = detector.detect("xyzzy nonexistent");

        assert!(ctx.primary.is_none());
        assert!(ctx.context_words.is_empty());
        assert_eq!(ctx.general_words, set(&["nonexistent", "xyzzy"]));
    }

    #[test]
    fn test_profile_label_is_not_vocabulary() {
        let detector = ContextDetector::new(
            &[ClientProfile::new("Automotive", "cars suv")],
            ContextPolicy::FirstMatch,
        );
        assert!(detector.detect("automotive").primary.is_none());
        assert!(detector.detect("SUV").primary.is_some());
    }

    #[test]
    fn test_retrieval_words_union() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::FirstMatch);
        let ctx = detector.detect("gaming launch");
        let words: Vec<&str> = ctx.retrieval_words().into_iter().collect();
        assert_eq!(words, vec!["app", "gaming", "launch", "mobile"]);
    }

    #[test]
    fn test_empty_query() {
        let detector = ContextDetector::new(&profiles(), ContextPolicy::FirstMatch);
        let ctx = detector.detect("  !!! ");
        assert!(ctx.is_empty());
        assert!(ctx.primary.is_none());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("first_match".parse::<ContextPolicy>().unwrap(), ContextPolicy::FirstMatch);
        assert_eq!("best_overlap".parse::<ContextPolicy>().unwrap(), ContextPolicy::BestOverlap);
        assert!("greedy".parse::<ContextPolicy>().is_err());
        assert_eq!(ContextPolicy::default().to_string(), "first_match");
    }
}

//! Inverted index for candidate retrieval
//!
//! This module provides:
//! - TemplateId: position of a template in the catalog
//! - PostingList: templates containing a word, in insertion order
//! - SearchIndex: word → PostingList, plus each template's word set
//!
//! # Architectural Rules
//!
//! - Built once from a complete corpus; never partially updated
//! - Stores ids only, not template content
//! - Term frequency is ignored: a word is posted once per template
//!
//! A rebuild produces a new index. Readers holding the old one are unaffected.

use crate::tokenizer::tokenize;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TemplateId
// ============================================================================

/// Position of a template in the catalog it was indexed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Index into the catalog's template list
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// PostingList
// ============================================================================

/// Templates containing a term, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    /// Template ids
    pub ids: Vec<TemplateId>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { ids: vec![] }
    }

    /// Add a template to the posting list
    pub fn add(&mut self, id: TemplateId) {
        self.ids.push(id);
    }

    /// Number of templates containing this term
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ============================================================================
// Candidates
// ============================================================================

/// Union of posting lists for a set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Distinct template ids in first-retrieved order
    pub ids: Vec<TemplateId>,
    /// True if retrieval stopped at the candidate limit
    pub truncated: bool,
}

// ============================================================================
// SearchIndex
// ============================================================================

/// Inverted index over template searchable text
///
/// # Invariant
///
/// Every word of every indexed text has a posting list containing that
/// text's id exactly once.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    /// Term -> PostingList mapping
    postings: FxHashMap<String, PostingList>,

    /// TemplateId -> unique words of that template
    doc_terms: Vec<FxHashSet<String>>,
}

impl SearchIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from texts; the i-th text gets `TemplateId(i)`
    ///
    /// # Example
    ///
    /// ```
    /// use curator_search::index::{SearchIndex, TemplateId};
    ///
    /// let index = SearchIndex::build(["gaming mobile launch", "banking credit card"]);
    /// assert_eq!(index.lookup("gaming"), &[TemplateId(0)]);
    /// assert!(index.lookup("xyzzy").is_empty());
    /// ```
    pub fn build<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = SearchIndex::new();
        for text in texts {
            index.push_document(text);
        }
        index
    }

    fn push_document(&mut self, text: &str) {
        let id = TemplateId(self.doc_terms.len() as u32);

        let mut terms = FxHashSet::default();
        // Insertion order of first occurrence keeps posting order stable
        for token in tokenize(text) {
            if terms.insert(token.clone()) {
                self.postings.entry(token).or_default().add(id);
            }
        }

        self.doc_terms.push(terms);
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Get total number of indexed templates
    pub fn total_docs(&self) -> usize {
        self.doc_terms.len()
    }

    /// Get number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Get document frequency for a term
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map(PostingList::len).unwrap_or(0)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Templates containing a term; empty for unknown terms
    pub fn lookup(&self, term: &str) -> &[TemplateId] {
        self.postings
            .get(term)
            .map(|p| p.ids.as_slice())
            .unwrap_or(&[])
    }

    /// Unique words of a template
    pub fn doc_terms(&self, id: TemplateId) -> Option<&FxHashSet<String>> {
        self.doc_terms.get(id.as_usize())
    }

    /// Union the posting lists of `words`, stopping after `limit` ids
    ///
    /// Ids appear in the order they are first retrieved, walking `words` in
    /// the order given.
    pub fn candidates<'a>(
        &self,
        words: impl IntoIterator<Item = &'a str>,
        limit: usize,
    ) -> Candidates {
        let mut seen = FxHashSet::default();
        let mut ids = Vec::new();

        for word in words {
            for &id in self.lookup(word) {
                if !seen.insert(id) {
                    continue;
                }
                if ids.len() >= limit {
                    return Candidates {
                        ids,
                        truncated: true,
                    };
                }
                ids.push(id);
            }
        }

        Candidates {
            ids,
            truncated: false,
        }
    }

    /// Get all terms in the index, sorted
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.postings.keys().cloned().collect();
        terms.sort();
        terms
    }
}

// ============================================================================
// Tests
// ============================================================================

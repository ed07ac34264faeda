//! Text normalization for indexing and queries
//!
//! Pipeline: lowercase → drop every char that is not `[a-z0-9]` or whitespace
//!           → collapse whitespace runs → trim
//!
//! Dropped characters are removed, not replaced: "e-commerce" becomes
//! "ecommerce". Queries, profile text and template text all go through the
//! same pipeline so their words compare equal.

use std::collections::BTreeSet;

/// Normalize text into lowercase alphanumeric words separated by single spaces
///
/// # Example
///
/// ```
/// use curator_search::tokenizer::normalize;
///
/// assert_eq!(normalize("  Mobile   GAMING, App! "), "mobile gaming app");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize text into normalized words, in order, duplicates kept
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize into a sorted set of unique words
///
/// # Example
///
/// ```
/// use curator_search::tokenizer::word_set;
///
/// let words = word_set("gaming app gaming");
/// assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["app", "gaming"]);
/// ```
pub fn word_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

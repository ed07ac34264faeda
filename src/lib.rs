//! Curator - context-aware advertising template recommendations
//!
//! Curator ranks advertising templates for a free-text query. The query is
//! matched against client profiles to detect a context (an industry or
//! client type), then templates are scored by context overlap, direct
//! query-term overlap and historical click-through rate.
//!
//! # Quick Start
//!
//! ```no_run
//! use curator::Curator;
//!
//! // A directory with template_details.json, template_tags.json,
//! // client_profiles.json and an optional curator.toml
//! let curator = Curator::open("data")?;
//!
//! for hit in curator.recommend("mobile gaming launch")?.hits {
//!     println!("{} {:.2} {}", hit.name(), hit.score, hit.reason_text());
//! }
//! # Ok::<(), curator::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `curator-core`: records, tables, search request/response types, errors
//! - `curator-search`: tokenizer, inverted index, context detection, scoring
//! - `curator-engine`: ingestion, corpus building, catalog, config, `Curator`

pub use curator_core::{
    ClientProfile, Error, LimitError, Limits, MatchReason, RawTables, Recommendation, Result, Row,
    SearchRequest, SearchResponse, SearchStats, Table, TemplateRecord, DEFAULT_TOP_K,
};
pub use curator_engine::{
    Catalog, ClientTemplate, CorpusConfig, Curator, CuratorConfig, DataConfig, DataSource,
    JsonDirSource, KeywordCount, MemorySource, SchemaReport, CONFIG_FILE_NAME,
};
pub use curator_search::{ContextPolicy, ScoreWeights};

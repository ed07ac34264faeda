//! Catalog engine for Curator
//!
//! This crate turns raw record sets into a searchable catalog and owns its
//! lifecycle:
//! - DataSource: where the record sets come from (JSON directory, memory)
//! - Ingestion: typed rows, CTR normalization, schema report
//! - CorpusBuilder: one TemplateRecord per unique template name
//! - Catalog: immutable corpus + index snapshot
//! - CuratorConfig: `curator.toml`
//! - Curator: application handle with rebuild-and-swap refresh
//!
//! The engine is the only component that knows about:
//! - Where data lives
//! - Catalog versions and refresh

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod ctr;
pub mod curator;
pub mod ingest;
pub mod source;

pub use catalog::{Catalog, ClientTemplate, KeywordCount};
pub use config::{CorpusConfig, CuratorConfig, DataConfig, CONFIG_FILE_NAME};
pub use corpus::{Corpus, CorpusBuilder};
pub use ctr::parse_ctr;
pub use curator::Curator;
pub use ingest::{ingest, IngestedTables, SchemaReport, TemplateDetailRow, TemplateTagRow};
pub use source::{DataSource, JsonDirSource, MemorySource};

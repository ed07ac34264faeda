//! Corpus construction
//!
//! Merges the three typed record sets into one `TemplateRecord` per unique
//! template name:
//!
//! ```text
//! details ──dedup by name──┐
//!                           ├── left join on first association ──► TemplateRecord
//! tags ──first per name────┘         │
//!                                    └── + profile keywords of associated clients
//! ```
//!
//! Preview resolution prefers the association URL and falls back to the
//! details URL. Searchable text is normalized with the same tokenizer the
//! index and queries use.

use crate::config::CorpusConfig;
use crate::ingest::{IngestedTables, SchemaReport, TemplateDetailRow, TemplateTagRow};
use curator_core::records::join_non_empty;
use curator_core::{ClientProfile, Limits, Result, TemplateRecord};
use curator_search::normalize;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Output of a corpus build
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// One record per unique template name, in details-table order
    pub templates: Vec<Arc<TemplateRecord>>,
    /// Client profiles, in table order
    pub profiles: Vec<ClientProfile>,
    /// Association rows, in table order
    pub tags: Vec<TemplateTagRow>,
    /// Problems found while ingesting and merging
    pub report: SchemaReport,
}

/// Builds a `Corpus` from typed record sets
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    options: CorpusConfig,
    limits: Limits,
}

/// Associations of one template: the first row plus every client name
struct Association<'a> {
    first: &'a TemplateTagRow,
    clients: Vec<String>,
}

impl CorpusBuilder {
    /// Create a builder with default options and limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set corpus options
    pub fn with_options(mut self, options: CorpusConfig) -> Self {
        self.options = options;
        self
    }

    /// Builder: set limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Merge typed record sets into a corpus
    ///
    /// # Errors
    ///
    /// `LimitExceeded` when the number of unique templates exceeds
    /// `limits.max_templates`.
    pub fn build(&self, tables: IngestedTables) -> Result<Corpus> {
        let IngestedTables {
            details,
            tags,
            profiles,
            mut report,
        } = tables;

        let associations = associations_by_template(&tags);

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut unique: Vec<&TemplateDetailRow> = Vec::with_capacity(details.len());
        for row in &details {
            if seen.insert(row.template_name.as_str()) {
                unique.push(row);
            } else {
                report.duplicate(&row.template_name);
            }
        }
        self.limits.validate_corpus_size(unique.len())?;

        let templates = unique
            .into_iter()
            .map(|row| {
                Arc::new(self.record(
                    row,
                    associations.get(row.template_name.as_str()),
                    &profiles,
                ))
            })
            .collect();

        Ok(Corpus {
            templates,
            profiles,
            tags,
            report,
        })
    }

    fn record(
        &self,
        row: &TemplateDetailRow,
        association: Option<&Association<'_>>,
        profiles: &[ClientProfile],
    ) -> TemplateRecord {
        let (campaign, client, tag_preview, clients) = match association {
            Some(a) => (
                a.first.campaign_name.as_str(),
                a.first.client_name.as_str(),
                a.first.preview_url.as_str(),
                a.clients.clone(),
            ),
            None => ("", "", "", Vec::new()),
        };

        let preview_url = if tag_preview.is_empty() {
            row.preview_url.clone()
        } else {
            tag_preview.to_string()
        };

        let mut parts = vec![
            row.template_name.clone(),
            row.description.clone(),
            campaign.to_string(),
            client.to_string(),
        ];
        if self.options.expand_client_profiles {
            parts.extend(profile_keywords(&clients, profiles));
        }
        let searchable_text = normalize(&join_non_empty(parts.iter().map(String::as_str)));

        TemplateRecord::new(row.template_name.clone(), row.description.clone())
            .with_ctr(row.avg_ctr)
            .with_preview(preview_url)
            .with_clients(clients)
            .with_searchable_text(searchable_text)
    }
}

/// First association row and distinct client names per template
fn associations_by_template(tags: &[TemplateTagRow]) -> FxHashMap<&str, Association<'_>> {
    let mut out: FxHashMap<&str, Association<'_>> = FxHashMap::default();
    for tag in tags {
        let entry = out
            .entry(tag.template_name.as_str())
            .or_insert_with(|| Association {
                first: tag,
                clients: Vec::new(),
            });
        if !tag.client_name.is_empty() && !entry.clients.contains(&tag.client_name) {
            entry.clients.push(tag.client_name.clone());
        }
    }
    out
}

/// Keyword text of every profile whose client type contains a client name
fn profile_keywords(clients: &[String], profiles: &[ClientProfile]) -> Vec<String> {
    let mut out = Vec::new();
    for client in clients {
        let needle = client.to_lowercase();
        for profile in profiles {
            if profile.client_type.to_lowercase().contains(&needle) {
                out.push(profile.keyword_text());
            }
        }
    }
    out
}

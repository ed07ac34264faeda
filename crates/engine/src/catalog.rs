//! Catalog: one consistent, immutable build of the corpus
//!
//! A Catalog owns the merged templates, the profiles, the association rows
//! and the search snapshot built over them. It is never mutated; a refresh
//! builds a new Catalog and swaps it in.

use crate::config::CuratorConfig;
use crate::corpus::CorpusBuilder;
use crate::ingest::{ingest, SchemaReport, TemplateTagRow};
use curator_core::records::KEYWORD_FIELDS;
use curator_core::{ClientProfile, RawTables, Result, TemplateRecord};
use curator_search::SearchSnapshot;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// An association row joined with its template record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientTemplate {
    /// Campaign name from the association row
    pub campaign_name: String,
    /// Client name from the association row
    pub client_name: String,
    /// Template name from the association row
    pub template_name: String,
    /// Template record, `None` when the details table has no such template
    pub template: Option<Arc<TemplateRecord>>,
}

/// A profile keyword and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    /// Trimmed, lowercased keyword
    pub keyword: String,
    /// Number of occurrences across all profiles
    pub count: usize,
}

/// Immutable corpus + index snapshot
#[derive(Debug)]
pub struct Catalog {
    snapshot: SearchSnapshot,
    by_name: FxHashMap<String, usize>,
    profiles: Vec<ClientProfile>,
    tags: Vec<TemplateTagRow>,
    report: SchemaReport,
}

impl Catalog {
    /// Build a catalog from raw tables
    ///
    /// # Errors
    ///
    /// Fails when ingestion fails (missing `template_name` column), the
    /// corpus exceeds `limits.max_templates`, or the context policy in the
    /// config is unknown.
    pub fn build(raw: &RawTables, config: &CuratorConfig, version: u64) -> Result<Self> {
        let start = Instant::now();
        let policy = config.context_policy()?;

        let corpus = CorpusBuilder::new()
            .with_options(config.corpus.clone())
            .with_limits(config.limits.clone())
            .build(ingest(raw)?)?;

        let by_name = corpus
            .templates
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), i))
            .collect();
        let snapshot =
            SearchSnapshot::build(corpus.templates, &corpus.profiles, policy).with_version(version);

        info!(
            target: "curator::engine",
            version,
            templates = snapshot.templates().len(),
            profiles = corpus.profiles.len(),
            associations = corpus.tags.len(),
            terms = snapshot.index().term_count(),
            policy = %policy,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Catalog built"
        );

        Ok(Catalog {
            snapshot,
            by_name,
            profiles: corpus.profiles,
            tags: corpus.tags,
            report: corpus.report,
        })
    }

    /// Catalog version (first build is 1)
    pub fn version(&self) -> u64 {
        self.snapshot.version()
    }

    /// The search snapshot
    pub fn snapshot(&self) -> &SearchSnapshot {
        &self.snapshot
    }

    /// Templates in corpus order
    pub fn templates(&self) -> &[Arc<TemplateRecord>] {
        self.snapshot.templates()
    }

    /// Template by exact name
    pub fn template(&self, name: &str) -> Option<&Arc<TemplateRecord>> {
        self.by_name
            .get(name)
            .and_then(|i| self.snapshot.templates().get(*i))
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.snapshot.templates().len()
    }

    /// True when the catalog has no templates
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Client profiles in corpus order
    pub fn profiles(&self) -> &[ClientProfile] {
        &self.profiles
    }

    /// Association rows in table order
    pub fn tags(&self) -> &[TemplateTagRow] {
        &self.tags
    }

    /// Schema problems found while building
    pub fn report(&self) -> &SchemaReport {
        &self.report
    }

    /// Association rows whose client name contains `client`, case-insensitively
    ///
    /// A blank name matches nothing.
    pub fn templates_by_client(&self, client: &str) -> Vec<ClientTemplate> {
        let needle = client.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.tags
            .iter()
            .filter(|t| t.client_name.to_lowercase().contains(&needle))
            .map(|t| ClientTemplate {
                campaign_name: t.campaign_name.clone(),
                client_name: t.client_name.clone(),
                template_name: t.template_name.clone(),
                template: self.template(&t.template_name).cloned(),
            })
            .collect()
    }

    /// Most frequent comma-separated keywords across all profiles
    ///
    /// Ordered by count descending; equal counts keep first-appearance order.
    pub fn popular_keywords(&self, top_n: usize) -> Vec<KeywordCount> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut order: Vec<String> = Vec::new();

        for profile in &self.profiles {
            for field in KEYWORD_FIELDS {
                for keyword in profile.field(field).split(',') {
                    let keyword = keyword.trim().to_lowercase();
                    if keyword.is_empty() {
                        continue;
                    }
                    let count = counts.entry(keyword.clone()).or_insert(0);
                    if *count == 0 {
                        order.push(keyword);
                    }
                    *count += 1;
                }
            }
        }

        let mut ranked: Vec<KeywordCount> = order
            .into_iter()
            .map(|keyword| {
                let count = counts.get(&keyword).copied().unwrap_or(0);
                KeywordCount { keyword, count }
            })
            .collect();
        // Stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::table::{CLIENT_PROFILES, TEMPLATE_DETAILS, TEMPLATE_TAGS};
    use curator_core::{Error, Table};

    fn raw() -> RawTables {
        RawTables {
            template_details: Table::new(
                TEMPLATE_DETAILS,
                &["template_name", "description", "avg_ctr", "preview_url"],
            )
            .with_row(&["T1", "gaming mobile launch", "1.2%", ""])
            .with_row(&["T2", "banking credit card", "6%", ""]),
            template_tags: Table::new(TEMPLATE_TAGS, &["campaign_name", "client_name", "template_name"])
                .with_row(&["Launch", "PlayCo", "T1"])
                .with_row(&["Cards", "BankCo", "T2"])
                .with_row(&["Retired", "PlayCo", "T9"]),
            client_profiles: Table::new(
                CLIENT_PROFILES,
                &["client_type", "keywords", "industry", "relevant_keywords"],
            )
            .with_row(&["Gaming", "mobile, gaming, app", "Entertainment", "Mobile"])
            .with_row(&["Finance", "credit, , loans", "banking", "mobile"]),
        }
    }

    fn catalog() -> Catalog {
        Catalog::build(&raw(), &CuratorConfig::default(), 1).unwrap()
    }

    #[test]
    fn test_build() {
        let catalog = catalog();
        assert_eq!(catalog.version(), 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.profiles().len(), 2);
        assert_eq!(catalog.template("T2").unwrap().avg_ctr, 6.0);
        assert!(catalog.template("T9").is_none());
        assert_eq!(catalog.snapshot().version(), 1);
    }

    #[test]
    fn test_invalid_policy_fails_build() {
        let config = CuratorConfig {
            context_policy: "greedy".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Catalog::build(&raw(), &config, 1),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_templates_by_client() {
        let catalog = catalog();
        let rows = catalog.templates_by_client("playco");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].template_name, "T1");
        assert_eq!(rows[0].campaign_name, "Launch");
        assert!(rows[0].template.is_some());
        // Association to a template missing from the details table
        assert_eq!(rows[1].template_name, "T9");
        assert!(rows[1].template.is_none());
    }

    #[test]
    fn test_templates_by_client_blank_or_unknown() {
        let catalog = catalog();
        assert!(catalog.templates_by_client("   ").is_empty());
        assert!(catalog.templates_by_client("Nobody").is_empty());
    }

    #[test]
    fn test_popular_keywords() {
        let catalog = catalog();
        let top = catalog.popular_keywords(3);

        assert_eq!(
            top,
            vec![
                KeywordCount {
                    keyword: "mobile".into(),
                    count: 3
                },
                KeywordCount {
                    keyword: "gaming".into(),
                    count: 1
                },
                KeywordCount {
                    keyword: "app".into(),
                    count: 1
                },
            ]
        );
        assert!(catalog.popular_keywords(0).is_empty());
        assert_eq!(catalog.popular_keywords(100).len(), 7);
    }
}

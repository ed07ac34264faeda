//! Typed ingestion of the raw record sets
//!
//! Raw tables are keyed by column name and any column may be absent. This
//! module resolves them once into typed rows whose fields are always
//! present (possibly empty) and reports schema problems.
//!
//! Only one problem is fatal: a template-details table without a
//! `template_name` column, since no record could be identified.

use crate::ctr::parse_ctr;
use curator_core::records::{CLIENT_TYPE, PROFILE_FIELDS};
use curator_core::table::TEMPLATE_DETAILS;
use curator_core::{ClientProfile, Error, RawTables, Result, Table};
use serde::Serialize;
use tracing::warn;

/// Column identifying a template in both template tables
pub const TEMPLATE_NAME: &str = "template_name";

/// Recommended template-details columns
pub const DETAIL_COLUMNS: [&str; 4] = [TEMPLATE_NAME, "description", "avg_ctr", "preview_url"];

/// Recommended association columns
pub const TAG_COLUMNS: [&str; 3] = ["campaign_name", "client_name", TEMPLATE_NAME];

// ============================================================================
// Typed rows
// ============================================================================

/// One template-details row
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDetailRow {
    /// Trimmed template name
    pub template_name: String,
    /// Description
    pub description: String,
    /// Parsed CTR, 0.0 when missing or malformed
    pub avg_ctr: f64,
    /// Preview URL from the details table
    pub preview_url: String,
}

/// One campaign/client association row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateTagRow {
    /// Campaign name
    pub campaign_name: String,
    /// Client name
    pub client_name: String,
    /// Trimmed template name
    pub template_name: String,
    /// Alternate preview URL
    pub preview_url: String,
}

/// All three record sets, typed
#[derive(Debug, Clone, Default)]
pub struct IngestedTables {
    /// Template details with a non-empty name, in table order
    pub details: Vec<TemplateDetailRow>,
    /// Associations with a non-empty template name, in table order
    pub tags: Vec<TemplateTagRow>,
    /// Client profiles, in table order
    pub profiles: Vec<ClientProfile>,
    /// Problems found while ingesting
    pub report: SchemaReport,
}

// ============================================================================
// SchemaReport
// ============================================================================

/// Non-fatal schema problems found during ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    /// (table, column) pairs that were expected but absent
    pub missing_columns: Vec<(String, String)>,
    /// Rows skipped because they had no template name
    pub skipped_rows: usize,
    /// Template names that appeared more than once in the details table
    pub duplicate_templates: Vec<String>,
}

impl SchemaReport {
    /// True when nothing was reported
    pub fn is_clean(&self) -> bool {
        self.missing_columns.is_empty()
            && self.skipped_rows == 0
            && self.duplicate_templates.is_empty()
    }

    fn check_columns(&mut self, table: &Table, columns: &[&str]) {
        for column in columns {
            if !table.has_column(column) {
                warn!(
                    target: "curator::ingest",
                    table = %table.name,
                    column = *column,
                    "Recommended column missing, treating as empty"
                );
                self.missing_columns
                    .push((table.name.clone(), column.to_string()));
            }
        }
    }

    /// Record a duplicate template name
    pub(crate) fn duplicate(&mut self, name: &str) {
        warn!(
            target: "curator::ingest",
            template = name,
            "Duplicate template name, keeping first occurrence"
        );
        self.duplicate_templates.push(name.to_string());
    }
}

// ============================================================================
// Ingestion
// ============================================================================

/// Resolve raw tables into typed rows
///
/// # Errors
///
/// `MissingColumn` when a non-empty template-details table has no
/// `template_name` column.
pub fn ingest(raw: &RawTables) -> Result<IngestedTables> {
    let mut report = SchemaReport::default();

    let details_table = &raw.template_details;
    if !details_table.has_column(TEMPLATE_NAME) && !details_table.is_empty() {
        return Err(Error::missing_column(TEMPLATE_DETAILS, TEMPLATE_NAME));
    }

    if !details_table.is_empty() {
        report.check_columns(details_table, &DETAIL_COLUMNS);
    }
    if !raw.template_tags.is_empty() {
        report.check_columns(&raw.template_tags, &TAG_COLUMNS);
    }
    if !raw.client_profiles.is_empty() {
        let mut profile_columns = vec![CLIENT_TYPE];
        profile_columns.extend(PROFILE_FIELDS);
        report.check_columns(&raw.client_profiles, &profile_columns);
    }

    let mut details = Vec::with_capacity(details_table.len());
    for row in &details_table.rows {
        let template_name = row.get(TEMPLATE_NAME).trim();
        if template_name.is_empty() {
            report.skipped_rows += 1;
            continue;
        }
        details.push(TemplateDetailRow {
            template_name: template_name.to_string(),
            description: row.get("description").trim().to_string(),
            avg_ctr: parse_ctr(row.get("avg_ctr")),
            preview_url: row.get("preview_url").trim().to_string(),
        });
    }

    let tags = raw
        .template_tags
        .rows
        .iter()
        .filter_map(|row| {
            let template_name = row.get(TEMPLATE_NAME).trim();
            if template_name.is_empty() {
                return None;
            }
            Some(TemplateTagRow {
                campaign_name: row.get("campaign_name").trim().to_string(),
                client_name: row.get("client_name").trim().to_string(),
                template_name: template_name.to_string(),
                preview_url: row.get("preview_url").trim().to_string(),
            })
        })
        .collect();

    let profiles = raw
        .client_profiles
        .rows
        .iter()
        .map(ClientProfile::from)
        .collect();

    if report.skipped_rows > 0 {
        warn!(
            target: "curator::ingest",
            table = TEMPLATE_DETAILS,
            skipped = report.skipped_rows,
            "Rows without a template name were skipped"
        );
    }

    Ok(IngestedTables {
        details,
        tags,
        profiles,
        report,
    })
}

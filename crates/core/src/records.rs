//! Catalog record types
//!
//! - TemplateRecord: denormalized template, one per unique template name
//! - ClientProfile: free-text description of a client type
//!
//! Both are built once per data load and never mutated afterward.

use crate::table::Row;
use serde::{Deserialize, Serialize};

// ============================================================================
// TemplateRecord
// ============================================================================

/// A recommendable template
///
/// Identity is `name`. `searchable_text` is derived by the corpus builder:
/// lowercase, alphanumeric-only, single-space separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Unique template name
    pub name: String,
    /// Free-text description (may be empty)
    pub description: String,
    /// Average click-through rate as a percentage, 0.0 when unknown
    pub avg_ctr: f64,
    /// Preview URL (may be empty)
    pub preview_url: String,
    /// Distinct client names linked through campaign records, first-seen order
    pub associated_clients: Vec<String>,
    /// Normalized text the index is built from
    pub searchable_text: String,
}

impl TemplateRecord {
    /// Create a record with only a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        TemplateRecord {
            name: name.into(),
            description: description.into(),
            avg_ctr: 0.0,
            preview_url: String::new(),
            associated_clients: Vec::new(),
            searchable_text: String::new(),
        }
    }

    /// Builder: set CTR
    pub fn with_ctr(mut self, ctr: f64) -> Self {
        self.avg_ctr = ctr;
        self
    }

    /// Builder: set preview URL
    pub fn with_preview(mut self, url: impl Into<String>) -> Self {
        self.preview_url = url.into();
        self
    }

    /// Builder: set associated clients
    pub fn with_clients(mut self, clients: Vec<String>) -> Self {
        self.associated_clients = clients;
        self
    }

    /// Builder: set searchable text
    pub fn with_searchable_text(mut self, text: impl Into<String>) -> Self {
        self.searchable_text = text.into();
        self
    }

    /// True when the preview reference is an http(s) link
    pub fn has_preview(&self) -> bool {
        self.preview_url.starts_with("http")
    }
}

// ============================================================================
// ClientProfile
// ============================================================================

/// Column holding the client type label
pub const CLIENT_TYPE: &str = "client_type";

/// Descriptive profile columns, in concatenation order
pub const PROFILE_FIELDS: [&str; 6] = [
    "keywords",
    "domain_url",
    "industry",
    "business_niche",
    "marketing_focus",
    "relevant_keywords",
];

/// Profile columns holding comma-separated keyword lists
pub const KEYWORD_FIELDS: [&str; 5] = [
    "keywords",
    "industry",
    "business_niche",
    "marketing_focus",
    "relevant_keywords",
];

/// A client type and the vocabulary that describes it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Client type label (e.g. "Gaming")
    pub client_type: String,
    /// Comma-separated keywords
    pub keywords: String,
    /// Client domain
    pub domain_url: String,
    /// Industry
    pub industry: String,
    /// Business niche
    pub business_niche: String,
    /// Marketing focus
    pub marketing_focus: String,
    /// Additional keywords
    pub relevant_keywords: String,
}

impl ClientProfile {
    /// Create a profile with a label and keywords
    pub fn new(client_type: impl Into<String>, keywords: impl Into<String>) -> Self {
        ClientProfile {
            client_type: client_type.into(),
            keywords: keywords.into(),
            ..Default::default()
        }
    }

    /// Builder: set industry
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Field value by column name, `""` for unknown columns
    pub fn field(&self, column: &str) -> &str {
        match column {
            CLIENT_TYPE => &self.client_type,
            "keywords" => &self.keywords,
            "domain_url" => &self.domain_url,
            "industry" => &self.industry,
            "business_niche" => &self.business_niche,
            "marketing_focus" => &self.marketing_focus,
            "relevant_keywords" => &self.relevant_keywords,
            _ => "",
        }
    }

    /// All descriptive fields joined by single spaces, blanks skipped
    ///
    /// The client type label is not part of the descriptive text.
    pub fn descriptive_text(&self) -> String {
        join_non_empty(PROFILE_FIELDS.iter().map(|f| self.field(f)))
    }

    /// Keyword-bearing fields joined by single spaces, blanks skipped
    pub fn keyword_text(&self) -> String {
        join_non_empty(KEYWORD_FIELDS.iter().map(|f| self.field(f)))
    }
}

impl From<&Row> for ClientProfile {
    fn from(row: &Row) -> Self {
        ClientProfile {
            client_type: row.get(CLIENT_TYPE).trim().to_string(),
            keywords: row.get("keywords").to_string(),
            domain_url: row.get("domain_url").to_string(),
            industry: row.get("industry").to_string(),
            business_niche: row.get("business_niche").to_string(),
            marketing_focus: row.get("marketing_focus").to_string(),
            relevant_keywords: row.get("relevant_keywords").to_string(),
        }
    }
}

/// Join trimmed, non-empty parts with single spaces
pub fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

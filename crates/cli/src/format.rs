//! Results → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one block per result, Redis-style `(empty list)` and `(error)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use curator_core::{Recommendation, SearchResponse};
use curator_engine::{ClientTemplate, KeywordCount};
use serde::Serialize;
use std::fmt::Display;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format an error.
pub fn format_error(err: &dyn Display, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format_error(&e, OutputMode::Json))
}

// =========================================================================
// Search
// =========================================================================

/// Format a ranked search response.
pub fn format_search(response: &SearchResponse, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(response),
        OutputMode::Human => format_search_human(response),
    }
}

fn format_search_human(response: &SearchResponse) -> String {
    if response.is_empty() {
        return "(empty list)".to_string();
    }

    let mut blocks: Vec<String> = Vec::with_capacity(response.len() + 2);
    if let Some(context) = &response.context {
        blocks.push(format!("context: {}", context));
    }
    blocks.extend(response.hits.iter().map(format_hit));
    if response.truncated {
        blocks.push(format!("({} shown, more available)", response.len()));
    }
    blocks.join("\n\n")
}

fn format_hit(hit: &Recommendation) -> String {
    let template = &hit.template;
    let mut lines = vec![
        format!("{}) {}", hit.rank, template.name),
        format!("   score:   {:.2}", hit.score),
        format!("   ctr:     {:.2}%", template.avg_ctr),
    ];
    if !template.description.is_empty() {
        lines.push(format!("   about:   {}", template.description));
    }
    if template.has_preview() {
        lines.push(format!("   preview: {}", template.preview_url));
    } else {
        lines.push("   preview: no preview".to_string());
    }
    lines.push(format!("   why:     {}", hit.reason_text()));
    if !template.associated_clients.is_empty() {
        lines.push(format!("   clients: {}", template.associated_clients.join(", ")));
    }
    lines.join("\n")
}

// =========================================================================
// Client
// =========================================================================

/// Format the templates used by matching clients.
pub fn format_client(rows: &[ClientTemplate], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(rows),
        OutputMode::Human => {
            if rows.is_empty() {
                return "(empty list)".to_string();
            }
            rows.iter()
                .enumerate()
                .map(|(i, row)| {
                    let detail = match &row.template {
                        Some(t) => format!("ctr {:.2}%", t.avg_ctr),
                        None => "no details".to_string(),
                    };
                    format!(
                        "{}) {} [{} / {}] ({})",
                        i + 1,
                        row.template_name,
                        row.client_name,
                        row.campaign_name,
                        detail
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

// =========================================================================
// Keywords
// =========================================================================

/// Format keyword counts.
pub fn format_keywords(keywords: &[KeywordCount], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(keywords),
        OutputMode::Human => {
            if keywords.is_empty() {
                return "(empty list)".to_string();
            }
            keywords
                .iter()
                .enumerate()
                .map(|(i, k)| format!("{}) \"{}\" (integer) {}", i + 1, k.keyword, k.count))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

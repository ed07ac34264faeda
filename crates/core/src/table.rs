//! Tabular input boundary
//!
//! The data-loading collaborator hands Curator three record sets, each a
//! list of rows keyed by column name (the shape a spreadsheet "get all
//! records" call produces). A missing cell reads as the empty string; a
//! missing column is never an error at this layer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a table, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, String>);

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Row(BTreeMap::new())
    }

    /// Cell text for a column, `""` when absent
    pub fn get(&self, column: &str) -> &str {
        self.0.get(column).map(String::as_str).unwrap_or("")
    }

    /// Set a cell
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Check whether a cell is present (even if blank)
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

/// A named record set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table (worksheet) name, used in diagnostics
    pub name: String,
    /// Column names in first-seen order
    pub columns: Vec<String>,
    /// Rows in source order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Table {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row positionally against `columns`
    ///
    /// Extra values are ignored; missing trailing values leave the cell absent.
    pub fn push(&mut self, values: &[&str]) {
        let row = self
            .columns
            .iter()
            .zip(values.iter())
            .map(|(c, v)| (c.clone(), v.to_string()))
            .collect();
        self.rows.push(row);
    }

    /// Builder: append a row positionally
    pub fn with_row(mut self, values: &[&str]) -> Self {
        self.push(values);
        self
    }

    /// Append a keyed row, registering unseen columns
    pub fn push_row(&mut self, row: Row) {
        for column in row.0.keys() {
            if !self.has_column(column) {
                self.columns.push(column.clone());
            }
        }
        self.rows.push(row);
    }

    /// Check whether a column exists
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a table from a JSON array of flat objects
    ///
    /// Strings are kept verbatim, numbers and booleans are rendered to text,
    /// `null` leaves the cell absent. Nested arrays or objects are rejected.
    pub fn from_json_records(name: impl Into<String>, value: serde_json::Value) -> Result<Self> {
        let name = name.into();
        let records = match value {
            serde_json::Value::Array(records) => records,
            other => {
                return Err(Error::Serialization(format!(
                    "table '{}': expected an array of records, found {}",
                    name,
                    json_kind(&other)
                )))
            }
        };

        let mut table = Table {
            name,
            columns: Vec::new(),
            rows: Vec::with_capacity(records.len()),
        };

        for (i, record) in records.into_iter().enumerate() {
            let fields = match record {
                serde_json::Value::Object(fields) => fields,
                other => {
                    return Err(Error::Serialization(format!(
                        "table '{}' row {}: expected an object, found {}",
                        table.name,
                        i,
                        json_kind(&other)
                    )))
                }
            };

            let mut row = Row::new();
            for (column, cell) in fields {
                let text = match cell {
                    serde_json::Value::Null => continue,
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(Error::Serialization(format!(
                            "table '{}' row {} column '{}': unsupported {} cell",
                            table.name,
                            i,
                            column,
                            json_kind(&other)
                        )))
                    }
                };
                row.insert(column, text);
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Worksheet name for template details
pub const TEMPLATE_DETAILS: &str = "Template_Details";
/// Worksheet name for campaign/client associations
pub const TEMPLATE_TAGS: &str = "Template_Tags_and_Previews";
/// Worksheet name for client profiles
pub const CLIENT_PROFILES: &str = "Client_Profiles";

/// The three record sets a catalog is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTables {
    /// Template name, description, CTR, preview
    pub template_details: Table,
    /// Campaign ↔ client ↔ template associations
    pub template_tags: Table,
    /// Client profiles with free-text descriptive fields
    pub client_profiles: Table,
}

impl Default for RawTables {
    fn default() -> Self {
        RawTables {
            template_details: Table::new(TEMPLATE_DETAILS, &[]),
            template_tags: Table::new(TEMPLATE_TAGS, &[]),
            client_profiles: Table::new(CLIENT_PROFILES, &[]),
        }
    }
}

//! Record-set sources
//!
//! A `DataSource` produces the three raw tables a catalog is built from.
//! Loading happens at open and on every refresh, so a source must be
//! re-readable.

use crate::config::DataConfig;
use curator_core::table::{CLIENT_PROFILES, TEMPLATE_DETAILS, TEMPLATE_TAGS};
use curator_core::{Error, RawTables, Result, Table};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

/// Producer of raw record sets
pub trait DataSource: Send + Sync {
    /// Load all three record sets
    fn load(&self) -> Result<RawTables>;

    /// Name for logging
    fn name(&self) -> &str;
}

// ============================================================================
// JsonDirSource
// ============================================================================

/// Three JSON files (arrays of flat objects) in one directory
///
/// A missing file is read as an empty table; an unreadable or malformed
/// file is an error.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
    files: DataConfig,
    name: String,
}

impl JsonDirSource {
    /// Source over `dir` with the default file names
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_files(dir, DataConfig::default())
    }

    /// Source over `dir` with custom file names
    pub fn with_files(dir: impl AsRef<Path>, files: DataConfig) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let name = format!("json:{}", dir.display());
        JsonDirSource { dir, files, name }
    }

    /// Directory the files are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_table(&self, table: &str, file: &str) -> Result<Table> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Table::new(table, &[]));
        }
        let content = std::fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            Error::Serialization(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        Table::from_json_records(table, value)
    }
}

impl DataSource for JsonDirSource {
    fn load(&self) -> Result<RawTables> {
        Ok(RawTables {
            template_details: self.read_table(TEMPLATE_DETAILS, &self.files.template_details)?,
            template_tags: self.read_table(TEMPLATE_TAGS, &self.files.template_tags)?,
            client_profiles: self.read_table(CLIENT_PROFILES, &self.files.client_profiles)?,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// Tables held in memory
///
/// `replace` swaps the tables; the next refresh picks them up.
#[derive(Debug, Default)]
pub struct MemorySource {
    tables: RwLock<RawTables>,
}

impl MemorySource {
    /// Source over the given tables
    pub fn new(tables: RawTables) -> Self {
        MemorySource {
            tables: RwLock::new(tables),
        }
    }

    /// Replace the tables served by later loads
    pub fn replace(&self, tables: RawTables) {
        *self.tables.write() = tables;
    }
}

impl DataSource for MemorySource {
    fn load(&self) -> Result<RawTables> {
        Ok(self.tables.read().clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

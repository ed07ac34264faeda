//! Curator: the application handle
//!
//! A Curator owns a data source, a configuration and the current catalog.
//! Queries clone the current `Arc<Catalog>` under a short read lock and
//! run without holding it. `refresh` loads and builds a new catalog outside
//! the lock and swaps it in under the write lock, so in-flight queries
//! finish against the catalog they started with.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use curator_core::{RawTables, Table};
//! use curator_core::table::{CLIENT_PROFILES, TEMPLATE_DETAILS};
//! use curator_engine::{Curator, CuratorConfig, MemorySource};
//!
//! let tables = RawTables {
//!     template_details: Table::new(TEMPLATE_DETAILS, &["template_name", "description", "avg_ctr"])
//!         .with_row(&["T1", "gaming mobile launch", "1.2%"])
//!         .with_row(&["T2", "banking credit card", "6%"]),
//!     client_profiles: Table::new(CLIENT_PROFILES, &["client_type", "keywords"])
//!         .with_row(&["Gaming", "mobile gaming app"]),
//!     ..Default::default()
//! };
//!
//! let curator = Curator::new(Arc::new(MemorySource::new(tables)), CuratorConfig::default())?;
//! let response = curator.recommend("gaming app")?;
//! assert_eq!(response.context.as_deref(), Some("Gaming"));
//! assert_eq!(response.names(), vec!["T1"]);
//! # Ok::<(), curator_core::Error>(())
//! ```

use crate::catalog::{Catalog, ClientTemplate, KeywordCount};
use crate::config::{CuratorConfig, CONFIG_FILE_NAME};
use crate::source::{DataSource, JsonDirSource};
use curator_core::{Result, SearchRequest, SearchResponse};
use curator_search::{OverlapScorer, TemplateSearch};
use parking_lot::{Mutex, RwLock};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Application handle: data source + config + current catalog
pub struct Curator {
    source: Arc<dyn DataSource>,
    config: CuratorConfig,
    search: TemplateSearch,
    catalog: RwLock<Arc<Catalog>>,
    /// Serializes refreshes so versions are assigned in swap order
    refresh_lock: Mutex<()>,
}

impl std::fmt::Debug for Curator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Curator")
            .field("source", &self.source.name())
            .field("version", &self.version())
            .field("search", &self.search)
            .finish()
    }
}

impl Curator {
    /// Validate `config`, load `source` and build the first catalog (version 1)
    ///
    /// # Errors
    ///
    /// Invalid configuration, unreadable source, or a failed catalog build.
    pub fn new(source: Arc<dyn DataSource>, config: CuratorConfig) -> Result<Self> {
        config.validate()?;

        let search = TemplateSearch::new()
            .with_scorer(Arc::new(OverlapScorer::new(config.weights)))
            .with_limits(config.limits.clone());

        let catalog = Self::load_catalog(source.as_ref(), &config, 1)?;

        info!(
            target: "curator::engine",
            source = source.name(),
            templates = catalog.len(),
            version = catalog.version(),
            "Curator opened"
        );

        Ok(Curator {
            source,
            config,
            search,
            catalog: RwLock::new(Arc::new(catalog)),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Open a data directory: `curator.toml` (defaults when absent) plus the
    /// JSON record files it names
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        let config = CuratorConfig::from_file_or_default(&dir.join(CONFIG_FILE_NAME))?;
        Self::open_with_config(dir, config)
    }

    /// Open a data directory with an explicit configuration
    pub fn open_with_config(data_dir: impl AsRef<Path>, config: CuratorConfig) -> Result<Self> {
        let source = JsonDirSource::with_files(data_dir, config.data.clone());
        Self::new(Arc::new(source), config)
    }

    fn load_catalog(source: &dyn DataSource, config: &CuratorConfig, version: u64) -> Result<Catalog> {
        let raw = source.load()?;
        let catalog = Catalog::build(&raw, config, version)?;
        if !catalog.report().is_clean() {
            warn!(
                target: "curator::engine",
                missing_columns = catalog.report().missing_columns.len(),
                skipped_rows = catalog.report().skipped_rows,
                duplicate_templates = catalog.report().duplicate_templates.len(),
                "Catalog built with schema problems"
            );
        }
        Ok(catalog)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Recommend templates for a free-text query using the configured top-k
    pub fn recommend(&self, query: &str) -> Result<SearchResponse> {
        self.search(&SearchRequest::new(query).with_top_k(self.config.top_k))
    }

    /// Run a search request against the current catalog
    pub fn search(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let catalog = self.catalog();
        self.search.search(catalog.snapshot(), req)
    }

    /// Association rows for clients whose name contains `client`
    pub fn templates_by_client(&self, client: &str) -> Vec<ClientTemplate> {
        self.catalog().templates_by_client(client)
    }

    /// Most frequent profile keywords
    pub fn popular_keywords(&self, top_n: usize) -> Vec<KeywordCount> {
        self.catalog().popular_keywords(top_n)
    }

    // ========================================================================
    // Catalog lifecycle
    // ========================================================================

    /// The current catalog
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Version of the current catalog
    pub fn version(&self) -> u64 {
        self.catalog.read().version()
    }

    /// Reload the source, rebuild, and swap in the new catalog
    ///
    /// Returns the new version. On failure the previous catalog keeps
    /// serving and the error is returned.
    pub fn refresh(&self) -> Result<u64> {
        let _guard = self.refresh_lock.lock();
        let version = self.version() + 1;

        match Self::load_catalog(self.source.as_ref(), &self.config, version) {
            Ok(catalog) => {
                *self.catalog.write() = Arc::new(catalog);
                info!(target: "curator::engine", version, "Catalog refreshed");
                Ok(version)
            }
            Err(e) => {
                warn!(
                    target: "curator::engine",
                    error = %e,
                    serving = version - 1,
                    "Catalog refresh failed, keeping previous catalog"
                );
                Err(e)
            }
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    /// Name of the data source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}

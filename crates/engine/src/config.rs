//! Curator configuration via `curator.toml`
//!
//! The config file lives in the data directory next to the record files.
//! Every key is optional; an absent file or an empty file means defaults.
//! To change settings, edit the file and refresh the catalog.

use curator_core::{Error, Limits, Result, DEFAULT_TOP_K};
use curator_search::{ContextPolicy, ScoreWeights};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "curator.toml";

/// Corpus construction options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Append the keyword fields of matching client profiles to each
    /// template's searchable text.
    pub expand_client_profiles: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            expand_client_profiles: true,
        }
    }
}

/// File names of the three record sets, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Template details (name, description, CTR, preview)
    pub template_details: String,
    /// Campaign/client associations
    pub template_tags: String,
    /// Client profiles
    pub client_profiles: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            template_details: "template_details.json".to_string(),
            template_tags: "template_tags.json".to_string(),
            client_profiles: "client_profiles.json".to_string(),
        }
    }
}

/// Curator configuration loaded from `curator.toml`.
///
/// # Example
///
/// ```toml
/// top_k = 20
/// context_policy = "first_match"
///
/// [weights]
/// context = 20.0
/// direct = 10.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Default number of recommendations per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Context policy: `"first_match"` or `"best_overlap"`.
    #[serde(default = "default_policy_str")]
    pub context_policy: String,
    /// Scoring weights.
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Corpus construction options.
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Record-set file names.
    #[serde(default)]
    pub data: DataConfig,
    /// Size limits.
    #[serde(default)]
    pub limits: Limits,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_policy_str() -> String {
    ContextPolicy::default().as_str().to_string()
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            context_policy: default_policy_str(),
            weights: ScoreWeights::default(),
            corpus: CorpusConfig::default(),
            data: DataConfig::default(),
            limits: Limits::default(),
        }
    }
}

impl CuratorConfig {
    /// Parse the policy string into a `ContextPolicy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"first_match"` or `"best_overlap"`.
    pub fn context_policy(&self) -> Result<ContextPolicy> {
        self.context_policy
            .parse()
            .map_err(|e: Error| Error::config(format!("{} in {}", e, CONFIG_FILE_NAME)))
    }

    /// Check every value that cannot be expressed by the type alone.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::config("top_k must be at least 1"));
        }
        if !self.weights.is_valid() {
            return Err(Error::config("weights must be finite and non-negative"));
        }
        self.context_policy()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Curator configuration
#
# Default number of recommendations per query
top_k = 20

# Context detection: "first_match" (default) or "best_overlap"
#   "first_match"  = first client profile (in file order) sharing a word with the query
#   "best_overlap" = profile sharing the most words, earliest on ties
context_policy = "first_match"

# final = relevance * (context * context_hits + direct * direct_hits) + performance * CTR
[weights]
context = 20.0
direct = 10.0
relevance = 0.9
performance = 0.1

[corpus]
# Add keywords of matching client profiles to each template's searchable text
expand_client_profiles = true

# Record files, relative to the data directory
[data]
template_details = "template_details.json"
template_tags = "template_tags.json"
client_profiles = "client_profiles.json"

[limits]
max_templates = 100000
max_candidates = 100000
max_query_bytes = 4096
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: CuratorConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read config from `path` when it exists, defaults otherwise.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` when the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::config(format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

//! Immutable searchable view of a corpus
//!
//! A SearchSnapshot bundles the template list, the inverted index built
//! over it and the context detector built over the profiles. It is built
//! once and shared read-only; a refresh builds a new snapshot.

use crate::context::{ContextDetector, ContextPolicy};
use crate::index::{SearchIndex, TemplateId};
use curator_core::{ClientProfile, TemplateRecord};
use std::sync::Arc;

/// Templates + index + context detector, consistent with each other
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    templates: Vec<Arc<TemplateRecord>>,
    index: SearchIndex,
    detector: ContextDetector,
    version: u64,
}

impl SearchSnapshot {
    /// Index `templates` (in order) and prepare context detection over `profiles`
    pub fn build(
        templates: Vec<Arc<TemplateRecord>>,
        profiles: &[ClientProfile],
        policy: ContextPolicy,
    ) -> Self {
        let index = SearchIndex::build(templates.iter().map(|t| t.searchable_text.as_str()));
        let detector = ContextDetector::new(profiles, policy);
        SearchSnapshot {
            templates,
            index,
            detector,
            version: 0,
        }
    }

    /// Builder: tag the snapshot with a catalog version
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Templates in index order
    pub fn templates(&self) -> &[Arc<TemplateRecord>] {
        &self.templates
    }

    /// Template by id
    pub fn get(&self, id: TemplateId) -> Option<&Arc<TemplateRecord>> {
        self.templates.get(id.as_usize())
    }

    /// The inverted index
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// The context detector
    pub fn detector(&self) -> &ContextDetector {
        &self.detector
    }

    /// Catalog version this snapshot was built for
    pub fn version(&self) -> u64 {
        self.version
    }
}

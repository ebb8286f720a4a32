//! Biomarker reference catalog
//!
//! This module holds the immutable knowledge base of biomarker definitions
//! (units, standard and optimal ranges, favorable direction, formula labels)
//! and resolves free-form lab names to canonical identifiers.
//!
//! The catalog is built once per process and shared read-only; see
//! [`ReferenceCatalog::global`].

pub mod aliases;
pub mod references;
pub mod resolve;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::models::biomarker::{BiomarkerCategory, BiomarkerId, BiomarkerReference};
use resolve::RESOLUTION_CHAIN;

/// Read-only view over the reference table and alias index
#[derive(Debug)]
pub struct ReferenceCatalog {
    references: &'static [BiomarkerReference],
    aliases: FxHashMap<&'static str, BiomarkerId>,
}

impl ReferenceCatalog {
    /// Build the catalog from the static tables
    #[must_use]
    pub fn new() -> Self {
        debug_assert!(
            references::REFERENCES
                .iter()
                .zip(BiomarkerId::ALL)
                .all(|(reference, id)| reference.id == *id),
            "reference table out of order with BiomarkerId"
        );

        let aliases = aliases::ALIASES.iter().copied().collect::<FxHashMap<_, _>>();

        log::debug!(
            "Built reference catalog with {} biomarkers and {} aliases",
            references::REFERENCES.len(),
            aliases.len()
        );

        Self {
            references: references::REFERENCES,
            aliases,
        }
    }

    /// The process-wide shared catalog
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<ReferenceCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::new)
    }

    /// Reference entry for a canonical id
    #[must_use]
    pub fn get(&self, id: BiomarkerId) -> &BiomarkerReference {
        &self.references[id as usize]
    }

    /// Resolve a free-form name to a canonical id, or `None` if nothing matches
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<BiomarkerId> {
        for (step, resolver) in RESOLUTION_CHAIN {
            if let Some(id) = resolver(name, &self.aliases) {
                log::trace!("Resolved '{name}' to {id} via {step} match");
                return Some(id);
            }
        }
        None
    }

    /// Look up a reference by id or lab name; absence means "cannot classify"
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&BiomarkerReference> {
        self.resolve(name).map(|id| self.get(id))
    }

    /// Every reference entry, in catalog order
    #[must_use]
    pub fn all(&self) -> &[BiomarkerReference] {
        self.references
    }

    /// Number of biomarkers in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Entries belonging to one category
    #[must_use]
    pub fn by_category(&self, category: BiomarkerCategory) -> Vec<&BiomarkerReference> {
        self.references
            .iter()
            .filter(|reference| reference.category == category)
            .collect()
    }

    /// Entries that are normally derived from other biomarkers
    #[must_use]
    pub fn calculated(&self) -> Vec<&BiomarkerReference> {
        self.references
            .iter()
            .filter(|reference| reference.is_calculated)
            .collect()
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BiomarkerId {
    /// Reference entry for this id from the shared catalog
    #[must_use]
    pub fn reference(self) -> &'static BiomarkerReference {
        ReferenceCatalog::global().get(self)
    }
}

/// Map a lab-report name to a canonical id using the shared catalog
#[must_use]
pub fn normalize_lab_name(name: &str) -> Option<BiomarkerId> {
    ReferenceCatalog::global().resolve(name)
}

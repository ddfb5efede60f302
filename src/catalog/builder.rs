//! Catalog generation and lookup

use crate::catalog::pattern::{Category, PatternRecord};
use crate::settings::document::PreferenceDocument;

/// Generate every pattern record, F2L then OLL then PLL
///
/// Pure and deterministic: two calls return structurally equal lists.
pub fn build_catalog() -> Vec<PatternRecord> {
    Category::ALL
        .into_iter()
        .flat_map(|category| {
            (1..=category.pattern_count()).map(move |number| PatternRecord::new(category, number))
        })
        .collect()
}

/// Immutable pattern list shared by the settings store, selector and session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PatternRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the full catalog
    pub fn new() -> Self {
        Self {
            records: build_catalog(),
        }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[PatternRecord] {
        &self.records
    }

    /// Records of one category, in catalog order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &PatternRecord> {
        self.records
            .iter()
            .filter(move |record| record.category == category)
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&PatternRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Check whether an id belongs to the catalog
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose id is enabled in `preferences`, in catalog order
    ///
    /// Ids the document doesn't mention are treated as disabled; documents
    /// coming out of `SettingsStore::load` are already reconciled, so this only
    /// matters for hand-built documents.
    pub fn enabled_set(&self, preferences: &PreferenceDocument) -> Vec<&PatternRecord> {
        self.records
            .iter()
            .filter(|record| preferences.is_enabled(&record.id))
            .collect()
    }
}

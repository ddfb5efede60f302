//! Preference document, reconciliation against the catalog and lenient decoding

use crate::catalog::{Catalog, Category};
use crate::io::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Enabled flag for a single pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    /// Pattern id
    pub id: String,
    /// Whether the pattern takes part in the drill
    pub enabled: bool,
}

impl PreferenceEntry {
    /// Create an entry
    pub fn new(id: impl Into<String>, enabled: bool) -> Self {
        Self {
            id: id.into(),
            enabled,
        }
    }
}

/// Per-pattern preferences, one array per category
///
/// Serialized as `{"f2l": [...], "oll": [...], "pll": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceDocument {
    /// F2L entries in catalog order
    pub f2l: Vec<PreferenceEntry>,
    /// OLL entries in catalog order
    pub oll: Vec<PreferenceEntry>,
    /// PLL entries in catalog order
    pub pll: Vec<PreferenceEntry>,
}

/// State of a category's "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryToggle {
    /// Every entry is enabled
    All,
    /// Some but not all entries are enabled
    Partial,
    /// No entry is enabled
    None,
}

/// Action taken while bringing a stored document in line with the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// The stored value wasn't a usable document at all; defaults were used
    Unparseable {
        /// Why the value was rejected
        reason: String,
    },
    /// One category field was missing or malformed; its defaults were used
    CategoryReset {
        /// Affected category
        category: Category,
        /// Why the field was rejected
        reason: String,
    },
    /// Entry for an id the catalog doesn't know was removed
    UnknownIdDropped {
        /// Category field the entry was found in
        category: Category,
        /// Removed id
        id: String,
    },
    /// Later entry repeating an id already seen in the field was removed
    DuplicateIdDropped {
        /// Category field the entry was found in
        category: Category,
        /// Repeated id
        id: String,
    },
    /// Catalog id absent from the stored field was added as enabled
    MissingIdAdded {
        /// Category the id belongs to
        category: Category,
        /// Added id
        id: String,
    },
}

impl PreferenceDocument {
    /// Document with every catalog pattern enabled
    pub fn default_for(catalog: &Catalog) -> Self {
        Self::with_all(catalog, true)
    }

    fn with_all(catalog: &Catalog, enabled: bool) -> Self {
        let entries = |category: Category| -> Vec<PreferenceEntry> {
            catalog
                .in_category(category)
                .map(|record| PreferenceEntry::new(record.id.clone(), enabled))
                .collect()
        };

        Self {
            f2l: entries(Category::F2l),
            oll: entries(Category::Oll),
            pll: entries(Category::Pll),
        }
    }

    /// Strictly parse a serialized document without consulting the catalog
    ///
    /// # Errors
    ///
    /// Returns `MalformedPreferenceDocument` if `raw` isn't JSON of the expected shape
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| DrillError::MalformedPreferenceDocument {
            reason: e.to_string(),
        })
    }

    /// Serialize for storage
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the serializer fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Entries of one category
    pub fn entries(&self, category: Category) -> &[PreferenceEntry] {
        match category {
            Category::F2l => &self.f2l,
            Category::Oll => &self.oll,
            Category::Pll => &self.pll,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<PreferenceEntry> {
        match category {
            Category::F2l => &mut self.f2l,
            Category::Oll => &mut self.oll,
            Category::Pll => &mut self.pll,
        }
    }

    fn all_entries(&self) -> impl Iterator<Item = &PreferenceEntry> {
        self.f2l.iter().chain(&self.oll).chain(&self.pll)
    }

    /// Check whether an id is present and enabled
    pub fn is_enabled(&self, id: &str) -> bool {
        self.all_entries()
            .find(|entry| entry.id == id)
            .is_some_and(|entry| entry.enabled)
    }

    /// Number of enabled entries across all categories
    pub fn enabled_count(&self) -> usize {
        self.all_entries().filter(|entry| entry.enabled).count()
    }

    /// Set the flag of a single pattern
    ///
    /// Returns `false` if no entry carries `id`.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        let entry = Category::ALL
            .into_iter()
            .find_map(|category| {
                self.entries(category)
                    .iter()
                    .position(|entry| entry.id == id)
                    .map(|index| (category, index))
            })
            .and_then(|(category, index)| self.entries_mut(category).get_mut(index));

        match entry {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Set every entry of a category, the "select all" checkbox
    pub fn set_category_enabled(&mut self, category: Category, enabled: bool) {
        for entry in self.entries_mut(category) {
            entry.enabled = enabled;
        }
    }

    /// Set every entry of every category
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for category in Category::ALL {
            self.set_category_enabled(category, enabled);
        }
    }

    /// Current state of a category's "select all" checkbox
    ///
    /// An empty category reads as `All`, matching `every` over no entries.
    pub fn category_toggle(&self, category: Category) -> CategoryToggle {
        let entries = self.entries(category);
        let enabled = entries.iter().filter(|entry| entry.enabled).count();

        if enabled == entries.len() {
            CategoryToggle::All
        } else if enabled == 0 {
            CategoryToggle::None
        } else {
            CategoryToggle::Partial
        }
    }

    /// Bring the document in line with the catalog
    ///
    /// Each category keeps catalog order. Unknown ids are dropped, missing
    /// ids are added as enabled and the first of duplicated ids wins.
    pub fn reconcile(&self, catalog: &Catalog) -> (Self, Vec<Repair>) {
        let mut repairs = Vec::new();
        let mut document = Self::with_all(catalog, true);

        for category in Category::ALL {
            let reconciled =
                reconcile_category(catalog, category, self.entries(category), &mut repairs);
            *document.entries_mut(category) = reconciled;
        }

        (document, repairs)
    }
}

fn reconcile_category(
    catalog: &Catalog,
    category: Category,
    stored: &[PreferenceEntry],
    repairs: &mut Vec<Repair>,
) -> Vec<PreferenceEntry> {
    let known: HashSet<&str> = catalog
        .in_category(category)
        .map(|record| record.id.as_str())
        .collect();

    let mut flags: HashMap<&str, bool> = HashMap::with_capacity(stored.len());
    for entry in stored {
        if !known.contains(entry.id.as_str()) {
            repairs.push(Repair::UnknownIdDropped {
                category,
                id: entry.id.clone(),
            });
            continue;
        }
        if flags.contains_key(entry.id.as_str()) {
            repairs.push(Repair::DuplicateIdDropped {
                category,
                id: entry.id.clone(),
            });
            continue;
        }
        flags.insert(entry.id.as_str(), entry.enabled);
    }

    catalog
        .in_category(category)
        .map(|record| {
            let enabled = flags.get(record.id.as_str()).copied().unwrap_or_else(|| {
                repairs.push(Repair::MissingIdAdded {
                    category,
                    id: record.id.clone(),
                });
                true
            });
            PreferenceEntry::new(record.id.clone(), enabled)
        })
        .collect()
}

/// Decode a stored value without ever failing
///
/// Garbage or a non-object root yields the default document. A missing or
/// malformed category field resets only that category. Whatever survives is
/// reconciled against the catalog. Every dropped, reset or added entry is
/// reported as a [`Repair`]; restoring catalog order is not.
pub fn decode_document(raw: &str, catalog: &Catalog) -> (PreferenceDocument, Vec<Repair>) {
    if let Ok(document) = PreferenceDocument::from_json(raw) {
        return document.reconcile(catalog);
    }

    let root = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(other) => {
            let reason = format!("expected an object, found {}", json_kind(&other));
            return (
                PreferenceDocument::default_for(catalog),
                vec![Repair::Unparseable { reason }],
            );
        }
        Err(e) => {
            return (
                PreferenceDocument::default_for(catalog),
                vec![Repair::Unparseable {
                    reason: e.to_string(),
                }],
            );
        }
    };

    let mut repairs = Vec::new();
    let mut partial = PreferenceDocument::default_for(catalog);
    for category in Category::ALL {
        let parsed = root
            .get(category.prefix())
            .ok_or_else(|| "field is missing".to_string())
            .and_then(|value| {
                Vec::<PreferenceEntry>::deserialize(value).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(entries) => *partial.entries_mut(category) = entries,
            Err(reason) => repairs.push(Repair::CategoryReset { category, reason }),
        }
    }

    let (document, reconcile_repairs) = partial.reconcile(catalog);
    repairs.extend(reconcile_repairs);
    (document, repairs)
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

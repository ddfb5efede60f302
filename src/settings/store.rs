//! Loading and saving the preference document

use crate::catalog::Catalog;
use crate::io::configuration::STORAGE_KEY;
use crate::io::error::Result;
use crate::settings::document::{PreferenceDocument, Repair, decode_document};
use crate::settings::storage::KeyValueStorage;
use tracing::{debug, warn};

/// Persists the preference document under a fixed storage key
pub struct SettingsStore<'c, S: KeyValueStorage> {
    catalog: &'c Catalog,
    storage: S,
}

impl<'c, S: KeyValueStorage> SettingsStore<'c, S> {
    /// Create a store over `storage`, validating documents against `catalog`
    pub const fn new(catalog: &'c Catalog, storage: S) -> Self {
        Self { catalog, storage }
    }

    /// Catalog documents are validated against
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Underlying storage backend
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored document
    ///
    /// Never fails. Missing values and unavailable storage both yield the
    /// default document. Stored values are repaired against the catalog and
    /// every repair is logged.
    pub fn load(&self) -> PreferenceDocument {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored preferences, using defaults");
                return PreferenceDocument::default_for(self.catalog);
            }
            Err(error) => {
                warn!(%error, "preference storage unavailable, using defaults");
                return PreferenceDocument::default_for(self.catalog);
            }
        };

        let (document, repairs) = decode_document(&raw, self.catalog);
        for repair in &repairs {
            log_repair(repair);
        }
        document
    }

    /// Overwrite the stored document
    ///
    /// No merge with what is stored; `document` must be complete.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the document can't be encoded and
    /// `StorageUnavailable` if the backend rejects the write
    pub fn save(&mut self, document: &PreferenceDocument) -> Result<()> {
        let raw = document.to_json()?;
        self.storage.set(STORAGE_KEY, &raw)?;
        debug!(enabled = document.enabled_count(), "saved preferences");
        Ok(())
    }

    /// Drop the stored document so the next load yields defaults
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend rejects the removal
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove(STORAGE_KEY)
    }
}

fn log_repair(repair: &Repair) {
    match repair {
        Repair::Unparseable { reason } => {
            warn!(%reason, "stored preferences unreadable, using defaults");
        }
        Repair::CategoryReset { category, reason } => {
            warn!(%category, %reason, "stored category malformed, using its defaults");
        }
        Repair::UnknownIdDropped { category, id } => {
            warn!(%category, %id, "dropped preference for unknown pattern");
        }
        Repair::DuplicateIdDropped { category, id } => {
            warn!(%category, %id, "dropped repeated preference entry");
        }
        Repair::MissingIdAdded { category, id } => {
            debug!(%category, %id, "added missing pattern as enabled");
        }
    }
}

//! User preferences and their persistence

/// Preference document, reconciliation and lenient decoding
pub mod document;
/// Key-value storage backends
pub mod storage;
/// Loading and saving the preference document
pub mod store;

pub use document::{CategoryToggle, PreferenceDocument, PreferenceEntry, Repair};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::SettingsStore;

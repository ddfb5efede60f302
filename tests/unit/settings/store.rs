//! Tests for loading, saving and resetting stored preferences

#[cfg(test)]
mod tests {
    use cubedrill::catalog::{Catalog, Category};
    use cubedrill::io::configuration::STORAGE_KEY;
    use cubedrill::io::error::{DrillError, Result, storage_unavailable};
    use cubedrill::settings::{
        FileStorage, KeyValueStorage, MemoryStorage, PreferenceDocument, SettingsStore,
    };
    use tempfile::TempDir;

    /// Backend standing in for storage disabled by the user
    struct UnavailableStorage;

    impl KeyValueStorage for UnavailableStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Err(storage_unavailable(key, "read", &"storage disabled"))
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(storage_unavailable(key, "write", &"storage disabled"))
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            Err(storage_unavailable(key, "remove", &"storage disabled"))
        }
    }

    // Tests loading with nothing stored yields all-enabled defaults
    // Verified by returning an empty document when absent
    #[test]
    fn test_load_defaults_when_absent() {
        let catalog = Catalog::new();
        let store = SettingsStore::new(&catalog, MemoryStorage::new());

        let document = store.load();

        assert_eq!(document, PreferenceDocument::default_for(&catalog));
        let ids: Vec<&str> = [&document.f2l, &document.oll, &document.pll]
            .into_iter()
            .flatten()
            .map(|entry| entry.id.as_str())
            .collect();
        let catalog_ids: Vec<&str> = catalog
            .records()
            .iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, catalog_ids);
    }

    // Tests save then load returns an equal document
    // Verified by saving defaults instead of the given document
    #[test]
    fn test_save_load_round_trip() {
        let catalog = Catalog::new();
        let mut store = SettingsStore::new(&catalog, MemoryStorage::new());

        let mut document = PreferenceDocument::default_for(&catalog);
        document.set_enabled("f2l_13", false);
        document.set_category_enabled(Category::Pll, false);

        store.save(&document).unwrap();
        assert_eq!(store.load(), document);
    }

    // Tests save writes the JSON document under the fixed key
    // Verified by changing the storage key
    #[test]
    fn test_save_uses_fixed_key() {
        let catalog = Catalog::new();
        let mut store = SettingsStore::new(&catalog, MemoryStorage::new());
        let document = PreferenceDocument::default_for(&catalog);

        store.save(&document).unwrap();

        let raw = store.storage().get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(STORAGE_KEY, "setting");
        assert_eq!(PreferenceDocument::from_json(&raw).unwrap(), document);
    }

    // Tests disabling one category via select-all leaves the others as they were
    // Verified by saving through a merge with defaults
    #[test]
    fn test_category_toggle_persists() {
        let catalog = Catalog::new();
        let mut store = SettingsStore::new(&catalog, MemoryStorage::new());

        let mut before = PreferenceDocument::default_for(&catalog);
        before.set_enabled("f2l_03", false);
        before.set_enabled("pll_10", false);
        store.save(&before).unwrap();

        let mut after = store.load();
        after.set_category_enabled(Category::Oll, false);
        store.save(&after).unwrap();

        let loaded = store.load();
        assert!(loaded.oll.iter().all(|entry| !entry.enabled));
        assert_eq!(loaded.f2l, before.f2l);
        assert_eq!(loaded.pll, before.pll);
    }

    // Tests stored values are repaired against the catalog on load
    // Verified by returning the stored document verbatim
    #[test]
    fn test_load_repairs_stale_document() {
        let catalog = Catalog::new();
        let raw = r#"{"f2l":[{"id":"f2l_01","enabled":false},{"id":"f2l_99","enabled":true}],"oll":[],"pll":[]}"#;
        let store = SettingsStore::new(&catalog, MemoryStorage::with_value(STORAGE_KEY, raw));

        let document = store.load();

        assert_eq!(document.f2l.len(), 41);
        assert!(!document.is_enabled("f2l_01"));
        assert!(!document.is_enabled("f2l_99"));
        assert_eq!(document.enabled_count(), 118);
    }

    // Tests corrupted JSON loads as defaults instead of failing
    // Verified by propagating the parse failure
    #[test]
    fn test_load_corrupted_value() {
        let catalog = Catalog::new();
        let store = SettingsStore::new(
            &catalog,
            MemoryStorage::with_value(STORAGE_KEY, "{\"f2l\": [tru"),
        );

        assert_eq!(store.load(), PreferenceDocument::default_for(&catalog));
    }

    // Tests unavailable storage degrades load and surfaces on save
    // Verified by swallowing the write error
    #[test]
    fn test_unavailable_storage() {
        let catalog = Catalog::new();
        let mut store = SettingsStore::new(&catalog, UnavailableStorage);

        assert_eq!(store.load(), PreferenceDocument::default_for(&catalog));

        let document = PreferenceDocument::default_for(&catalog);
        assert!(matches!(
            store.save(&document),
            Err(DrillError::StorageUnavailable { .. })
        ));
        assert!(store.reset().is_err());
    }

    // Tests reset makes the next load return defaults
    // Verified by making reset a no-op
    #[test]
    fn test_reset() {
        let catalog = Catalog::new();
        let temp_dir = TempDir::new().unwrap();
        let mut store = SettingsStore::new(&catalog, FileStorage::new(temp_dir.path()));

        let mut document = PreferenceDocument::default_for(&catalog);
        document.set_all_enabled(false);
        store.save(&document).unwrap();
        assert_eq!(store.load().enabled_count(), 0);

        store.reset().unwrap();
        assert_eq!(store.load(), PreferenceDocument::default_for(&catalog));
        assert!(std::ptr::eq(store.catalog(), &catalog));
    }
}

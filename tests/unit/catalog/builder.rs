//! Tests for catalog generation, lookup and enabled-set derivation

#[cfg(test)]
mod tests {
    use cubedrill::catalog::{Catalog, Category, build_catalog};
    use cubedrill::settings::PreferenceDocument;
    use std::collections::HashSet;

    // Tests total catalog size
    // Verified by dropping the PLL category from generation
    #[test]
    fn test_build_catalog_size() {
        assert_eq!(build_catalog().len(), 41 + 57 + 21);
    }

    // Tests ids are unique across the whole catalog
    // Verified by numbering every category from the same counter
    #[test]
    fn test_build_catalog_unique_ids() {
        let catalog = build_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    // Tests categories are contiguous, ordered and strictly increasing
    // Verified by interleaving categories
    #[test]
    fn test_build_catalog_category_layout() {
        let catalog = build_catalog();

        let mut offset = 0;
        for category in Category::ALL {
            let count = category.pattern_count();
            let slice = catalog.get(offset..offset + count).unwrap();

            for (index, record) in slice.iter().enumerate() {
                assert_eq!(record.category, category);
                assert_eq!(record.id, format!("{}_{:02}", category.prefix(), index + 1));
            }
            assert!(slice.windows(2).all(|pair| pair[0].id < pair[1].id));
            offset += count;
        }
        assert_eq!(offset, catalog.len());
    }

    // Tests generation is idempotent
    // Verified by shuffling records on each call
    #[test]
    fn test_build_catalog_idempotent() {
        assert_eq!(build_catalog(), build_catalog());
        assert_eq!(Catalog::new(), Catalog::default());
    }

    // Tests category filtering and lookup
    // Verified by making get match on prefix
    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new();

        assert_eq!(catalog.in_category(Category::Oll).count(), 57);
        assert_eq!(
            catalog.get("pll_21").map(|record| record.category),
            Some(Category::Pll)
        );
        assert!(catalog.contains("f2l_41"));
        assert!(!catalog.contains("f2l_42"));
        assert!(!catalog.contains("F2L_01"));
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.records().len());
    }

    // Tests enabled-set derivation keeps catalog order and drops disabled ids
    // Verified by deriving from document order reversed
    #[test]
    fn test_enabled_set_filters_in_catalog_order() {
        let catalog = Catalog::new();
        let mut preferences = PreferenceDocument::default_for(&catalog);
        preferences.set_category_enabled(Category::F2l, false);
        preferences.set_category_enabled(Category::Oll, false);
        preferences.set_enabled("pll_02", false);
        preferences.set_enabled("oll_57", true);

        let enabled = catalog.enabled_set(&preferences);
        let ids: Vec<&str> = enabled.iter().map(|record| record.id.as_str()).collect();

        assert_eq!(ids.len(), 21);
        assert_eq!(ids.first().copied(), Some("oll_57"));
        assert_eq!(ids.get(1).copied(), Some("pll_01"));
        assert!(!ids.contains(&"pll_02"));
    }

    // Tests default preferences enable the full catalog
    // Verified by defaulting entries to disabled
    #[test]
    fn test_enabled_set_default_is_whole_catalog() {
        let catalog = Catalog::new();
        let preferences = PreferenceDocument::default_for(&catalog);

        let enabled = catalog.enabled_set(&preferences);
        assert_eq!(enabled.len(), catalog.len());
    }
}

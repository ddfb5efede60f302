//! Tests for catalog constants and storage layout

#[cfg(test)]
mod tests {
    use cubedrill::io::configuration::{
        APP_DIR_NAME, DEFAULT_LOG_FILTER, F2L_PATTERN_COUNT, IMAGE_EXTENSION,
        MIN_PATTERNS_FOR_REPICK, MOVE_IMAGE_ROOT, OLL_PATTERN_COUNT, PATTERN_IMAGE_ROOT,
        PATTERN_NUMBER_WIDTH, PLL_PATTERN_COUNT, STORAGE_FILE_EXTENSION, STORAGE_KEY,
        TEMP_FILE_EXTENSION, VERBOSE_LOG_FILTER,
    };

    // Tests category sizes
    // Verified by changing the OLL count
    #[test]
    fn test_pattern_counts() {
        assert_eq!(F2L_PATTERN_COUNT, 41);
        assert_eq!(OLL_PATTERN_COUNT, 57);
        assert_eq!(PLL_PATTERN_COUNT, 21);
    }

    // Tests every pattern number fits the id width
    // Verified by reducing the width to one digit
    #[test]
    fn test_pattern_number_width_fits_counts() {
        let widest = F2L_PATTERN_COUNT
            .max(OLL_PATTERN_COUNT)
            .max(PLL_PATTERN_COUNT)
            .to_string()
            .len();
        assert_eq!(PATTERN_NUMBER_WIDTH, widest);
    }

    // Tests the storage key existing documents were written under
    // Verified by renaming the key
    #[test]
    fn test_storage_key() {
        assert_eq!(STORAGE_KEY, "setting");
        assert_eq!(STORAGE_FILE_EXTENSION, "json");
        assert_ne!(TEMP_FILE_EXTENSION, STORAGE_FILE_EXTENSION);
    }

    // Tests image roots are absolute and distinct
    // Verified by pointing both roots at the same directory
    #[test]
    fn test_image_roots() {
        assert!(PATTERN_IMAGE_ROOT.starts_with('/'));
        assert!(MOVE_IMAGE_ROOT.starts_with('/'));
        assert_ne!(PATTERN_IMAGE_ROOT, MOVE_IMAGE_ROOT);
        assert_eq!(IMAGE_EXTENSION, "png");
    }

    // Tests filesystem safety of the app directory name
    // Verified by adding a path separator
    #[test]
    fn test_app_dir_name_no_special_chars() {
        assert!(!APP_DIR_NAME.is_empty());
        for ch in APP_DIR_NAME.chars() {
            assert!(
                ch.is_ascii_alphanumeric() || ch == '_' || ch == '-',
                "App directory name contains invalid character: {ch}"
            );
        }
    }

    // Tests re-pick threshold and log filters
    // Verified by lowering the threshold to one
    #[test]
    fn test_runtime_defaults() {
        assert_eq!(MIN_PATTERNS_FOR_REPICK, 2);
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert!(VERBOSE_LOG_FILTER.contains("debug"));
    }
}

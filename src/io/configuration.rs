//! Catalog constants, storage layout and runtime configuration defaults

// Catalog sizes per category
/// Number of F2L patterns
pub const F2L_PATTERN_COUNT: usize = 41;
/// Number of OLL patterns
pub const OLL_PATTERN_COUNT: usize = 57;
/// Number of PLL patterns
pub const PLL_PATTERN_COUNT: usize = 21;

/// Digits in the numeric suffix of a pattern id (`f2l_01`)
pub const PATTERN_NUMBER_WIDTH: usize = 2;

// Image references are opaque to the core; the presentation layer resolves them
/// Root of the pattern-only images
pub const PATTERN_IMAGE_ROOT: &str = "/cubes";
/// Root of the pattern-with-move-sequence images
pub const MOVE_IMAGE_ROOT: &str = "/cubes-with-move";
/// Extension shared by every pattern image
pub const IMAGE_EXTENSION: &str = "png";

// Persistent storage layout
/// Key the preference document is stored under
pub const STORAGE_KEY: &str = "setting";
/// Extension of files written by the file storage backend
pub const STORAGE_FILE_EXTENSION: &str = "json";
/// Extra extension of the file a value is staged in before replacing the stored file
pub const TEMP_FILE_EXTENSION: &str = "tmp";
/// Directory created under the platform data directory
pub const APP_DIR_NAME: &str = "cubedrill";

/// Enabled patterns required before picking again can change the card
pub const MIN_PATTERNS_FOR_REPICK: usize = 2;

// Logging defaults for the terminal front-end
/// Filter used when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "cubedrill=debug";

//! Static pattern catalog
//!
//! The catalog is generated once and never mutated. It is constructed
//! explicitly and passed by reference to the settings store and session.

/// Catalog generation and lookup
pub mod builder;
/// Pattern records, categories and image references
pub mod pattern;

pub use builder::{Catalog, build_catalog};
pub use pattern::{Category, ImageRefs, PatternRecord};

//! Flashcard drills for memorizing speedcubing algorithm patterns
//!
//! A static catalog of F2L, OLL and PLL patterns, per-pattern preferences
//! persisted in key-value storage, and a selector that picks the next card
//! uniformly at random while avoiding the card currently shown.

#![forbid(unsafe_code)]

/// Static pattern catalog
pub mod catalog;
/// Input/output operations, front-end and error handling
pub mod io;
/// Random card selection and the drill session
pub mod selection;
/// User preferences and their persistence
pub mod settings;

pub use io::error::{DrillError, Result};

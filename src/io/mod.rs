//! Front-end, configuration and error handling

/// Command-line front-end
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Keyboard shortcuts mapped to drill intents
pub mod shortcuts;

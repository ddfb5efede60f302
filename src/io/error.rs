//! Error types for storage, preference decoding and session operations

use std::fmt;

/// Main error type for all drill operations
#[derive(Debug)]
pub enum DrillError {
    /// Persistent storage could not be read or written
    ///
    /// `SettingsStore::load` recovers from this by falling back to defaults,
    /// `SettingsStore::save` hands it to the caller.
    StorageUnavailable {
        /// Storage key involved in the operation
        key: String,
        /// Operation that was attempted (read, write, remove, locate)
        operation: &'static str,
        /// Description of the underlying failure
        reason: String,
    },

    /// Stored preference document doesn't match the expected shape
    MalformedPreferenceDocument {
        /// Description of what's wrong with the stored value
        reason: String,
    },

    /// Preference document could not be serialized for storage
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Session operation invoked before the session finished loading
    SessionNotReady {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// Writing front-end output failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable {
                key,
                operation,
                reason,
            } => {
                write!(f, "Storage unavailable during {operation} of '{key}': {reason}")
            }
            Self::MalformedPreferenceDocument { reason } => {
                write!(f, "Malformed preference document: {reason}")
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize preference document: {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SessionNotReady { operation } => {
                write!(f, "Cannot {operation} before the session has started")
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl std::error::Error for DrillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for drill results
pub type Result<T> = std::result::Result<T, DrillError>;

impl From<std::io::Error> for DrillError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl From<serde_json::Error> for DrillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DrillError {
    DrillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a storage unavailable error
pub fn storage_unavailable(
    key: &str,
    operation: &'static str,
    reason: &impl ToString,
) -> DrillError {
    DrillError::StorageUnavailable {
        key: key.to_string(),
        operation,
        reason: reason.to_string(),
    }
}

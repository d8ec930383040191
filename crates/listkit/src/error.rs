//! Error types for listkit.
//!
//! List operations themselves never fail: malformed input from a view is a
//! silent no-op. Errors only arise at the edges, when configuration or item
//! input is parsed.

use std::path::PathBuf;

/// Result type alias for listkit edge operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur while loading configuration or item input.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// TOML configuration could not be parsed.
    #[error("Invalid list configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON item input could not be parsed.
    #[error("Invalid item JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An input entry was neither a record nor null.
    #[error("Entry {position} is not a record (found {found})")]
    NotARecord { position: usize, found: &'static str },

    /// A configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create a not-a-record error for the entry at `position`.
    pub fn not_a_record(position: usize, value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "a sequence",
            serde_json::Value::Object(_) => "a record",
        };
        Self::NotARecord { position, found }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

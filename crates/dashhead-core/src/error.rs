//! Error types for dashhead-core
//!
//! Rendering a header never fails; these errors only surface while loading
//! the ambient inputs (storage snapshots and configuration files).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dashhead operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    // ===================
    // Store Errors
    // ===================
    #[error("Invalid key-value store in {path}: {reason}")]
    InvalidStore { path: PathBuf, reason: String },
}

impl CoreError {
    /// Actionable hint for the user, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::InvalidStore { .. } => Some(
                "The store must be a flat JSON object, e.g. {\"currentVersion\": \"2.1.0\"}"
                    .to_string(),
            ),
            CoreError::TomlParse { .. } => None,
        }
    }
}

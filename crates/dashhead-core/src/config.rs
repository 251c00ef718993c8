//! Header configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an
//! empty file (or no file at all) yields the stock configuration:
//!
//! ```toml
//! [storage]
//! version_key = "currentVersion"
//! dark_mode_key = "darkMode"
//!
//! [breadcrumbs]
//! max_display = 5
//! ```

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Storage key holding the application version
pub const VERSION_KEY: &str = "currentVersion";
/// Storage key holding the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Names of the keys read from ambient storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub version_key: String,
    pub dark_mode_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            version_key: VERSION_KEY.to_string(),
            dark_mode_key: DARK_MODE_KEY.to_string(),
        }
    }
}

/// Breadcrumb trail display options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Maximum crumbs shown before the trail is truncated
    pub max_display: usize,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self { max_display: 5 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub storage: StorageKeys,
    pub breadcrumbs: BreadcrumbConfig,
}

impl HeaderConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, CoreError> {
        toml::from_str(content).map_err(|source| CoreError::TomlParse {
            path: origin.to_path_buf(),
            message: source.message().to_string(),
            source,
        })
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "Loaded header config");
                Self::from_toml_str(&content, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(CoreError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = HeaderConfig::from_toml_str("", Path::new("dashhead.toml")).unwrap();
        assert_eq!(config, HeaderConfig::default());
        assert_eq!(config.storage.version_key, "currentVersion");
        assert_eq!(config.storage.dark_mode_key, "darkMode");
        assert_eq!(config.breadcrumbs.max_display, 5);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = HeaderConfig::from_toml_str(
            "[storage]\nversion_key = \"appVersion\"\n",
            Path::new("dashhead.toml"),
        )
        .unwrap();
        assert_eq!(config.storage.version_key, "appVersion");
        assert_eq!(config.storage.dark_mode_key, "darkMode");
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let err = HeaderConfig::from_toml_str("[breadcrumbs]\nmax_display = \"five\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, CoreError::TomlParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = HeaderConfig::load(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, HeaderConfig::default());
    }
}

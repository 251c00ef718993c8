//! Ambient values read from storage at render time

use crate::config::StorageKeys;
use crate::storage::KeyValueStore;
use crate::theme::ColorScheme;
use serde::Serialize;

/// Snapshot of the two ambient values the header displays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderContext {
    /// Stored version, shown verbatim; `None` when never written
    pub version: Option<String>,
    /// Only the literal string `"true"` enables dark mode
    pub dark_mode: bool,
}

impl HeaderContext {
    pub fn new(version: Option<String>, dark_mode: bool) -> Self {
        Self { version, dark_mode }
    }

    /// Read both values from `store`
    pub fn from_store(store: &dyn KeyValueStore, keys: &StorageKeys) -> Self {
        Self {
            version: store.get(&keys.version_key),
            dark_mode: parse_dark_mode(store.get(&keys.dark_mode_key).as_deref()),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_mode(self.dark_mode)
    }
}

/// `Some("true")` is dark; anything else, including absence, is light
pub fn parse_dark_mode(raw: Option<&str>) -> bool {
    raw == Some("true")
}

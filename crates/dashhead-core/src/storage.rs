//! Read-only key-value storage
//!
//! The header reads two values written elsewhere (version and theme flag).
//! In the browser this is `localStorage`; natively it is a flat JSON object
//! on disk or an in-memory map.

use crate::error::CoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default storage file name inside the config directory
pub const STORE_FILE_NAME: &str = "storage.json";

/// Read-only string store
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Snapshot of a JSON object file, taken when opened
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Default location: `<config_dir>/dashhead/storage.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dashhead").join(STORE_FILE_NAME))
    }

    /// Load the store. A missing file is an empty store.
    ///
    /// Non-string scalars are kept in their JSON text form (`true` -> "true"),
    /// `null` entries are treated as absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Storage file not found, using empty store");
                return Ok(Self {
                    path,
                    inner: MemoryStore::new(),
                });
            }
            Err(source) => return Err(CoreError::FileRead { path, source }),
        };

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| CoreError::JsonParse {
                path: path.clone(),
                message: source.to_string(),
                source,
            })?;

        let serde_json::Value::Object(map) = value else {
            return Err(CoreError::InvalidStore {
                path,
                reason: "expected a JSON object at the top level".to_string(),
            });
        };

        let mut inner = MemoryStore::new();
        for (key, value) in map {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => inner.set(key, s),
                serde_json::Value::Bool(_) | serde_json::Value::Number(_) => {
                    inner.set(key, value.to_string())
                }
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(CoreError::InvalidStore {
                        path,
                        reason: format!("value for '{}' is not a scalar", key),
                    });
                }
            }
        }

        debug!(path = %path.display(), entries = inner.len(), "Loaded storage file");
        Ok(Self { path, inner })
    }

    /// Like [`JsonFileStore::open`], but any error degrades to an empty store
    pub fn open_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable storage file");
                Self {
                    path: path.to_path_buf(),
                    inner: MemoryStore::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }
}

//! Browser `localStorage` as a read-only key-value store

use dashhead_core::KeyValueStore;

/// `window.localStorage`. Off the browser every key reads as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    #[cfg(target_family = "wasm")]
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()?.local_storage().ok()??.get_item(key).ok()?
    }

    #[cfg(not(target_family = "wasm"))]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

//! # `localStorage` key/value store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through [`web_sys::Storage`].
//!
//! The handle is looked up on every call: `web_sys::Storage` is not `Clone`,
//! and the lookup is a cheap property read. When storage is unavailable (for
//! example disabled by privacy settings) reads return `None` and writes do
//! nothing.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on native targets. The whole
//! storage area is one JSON object written to `<base_dir>/storage.json`, which
//! keeps the session and preferences across app restarts.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/docmind/` |
//! | Linux | `~/.local/share/docmind/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\docmind\` |
//!
//! Every call re-reads the file, so two handles on the same directory always
//! agree. A missing or corrupt file reads as empty.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::kv::KeyValueStore;

const FILE_NAME: &str = "storage.json";

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn load(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(self.path())
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, entries: &BTreeMap<String, String>) {
        let Ok(raw) = serde_json::to_string_pretty(entries) else {
            return;
        };
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.path(), raw);
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        store.set(keys::ACCESS_TOKEN, "tok1");
        store.set(keys::LANGUAGE, "en");

        // Re-open from same directory
        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get(keys::ACCESS_TOKEN).as_deref(), Some("tok1"));
        assert_eq!(reopened.get(keys::LANGUAGE).as_deref(), Some("en"));

        reopened.remove(keys::ACCESS_TOKEN);
        assert!(store.get(keys::ACCESS_TOKEN).is_none());
        assert_eq!(store.get(keys::LANGUAGE).as_deref(), Some("en"));
    }

    #[test]
    fn test_missing_directory_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("not-created-yet"));

        assert!(store.get(keys::USER).is_none());
        store.remove(keys::USER);
        assert!(!dir.path().join("not-created-yet").exists());
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FILE_NAME), "not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.get(keys::ACCESS_TOKEN).is_none());

        store.set(keys::ACCESS_TOKEN, "tok1");
        assert_eq!(store.get(keys::ACCESS_TOKEN).as_deref(), Some("tok1"));
    }
}

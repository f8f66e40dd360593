//! # Display preferences: `darkMode` and `language`
//!
//! Two loose string entries in durable storage, read and written only here:
//!
//! | Key | Values | Default |
//! |-----|--------|---------|
//! | [`keys::DARK_MODE`] | `"true"` / `"false"` | light mode |
//! | [`keys::LANGUAGE`] | `"es"` / `"en"` | Spanish |
//!
//! Anything unrecognised reads as the default, so a missing or hand-edited
//! entry never stops the app from starting.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::kv::KeyValueStore;

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Human-readable label shown in the language picker.
    pub fn label(self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }
}

/// User display preferences persisted alongside the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

impl Preferences {
    /// Read preferences, falling back to defaults for missing entries.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let dark_mode = store.get(keys::DARK_MODE).as_deref() == Some("true");
        let language = store
            .get(keys::LANGUAGE)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self { dark_mode, language }
    }

    /// Persist both entries.
    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(keys::DARK_MODE, if self.dark_mode { "true" } else { "false" });
        store.set(keys::LANGUAGE, self.language.code());
    }

    /// Builder method to toggle dark mode.
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Builder method to set the language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs, Preferences::default());
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.language, Language::Es);
    }

    #[test]
    fn test_save_writes_plain_strings() {
        let store = MemoryStore::new();
        Preferences::default()
            .with_dark_mode(true)
            .with_language(Language::En)
            .save(&store);

        assert_eq!(store.get(keys::DARK_MODE).as_deref(), Some("true"));
        assert_eq!(store.get(keys::LANGUAGE).as_deref(), Some("en"));

        let loaded = Preferences::load(&store);
        assert!(loaded.dark_mode);
        assert_eq!(loaded.language, Language::En);
    }

    #[test]
    fn test_unrecognised_values_fall_back() {
        let store = MemoryStore::new();
        store.set(keys::DARK_MODE, "yes");
        store.set(keys::LANGUAGE, "fr");

        assert_eq!(Preferences::load(&store), Preferences::default());
    }
}

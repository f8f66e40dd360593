use dioxus::prelude::*;
use store::Preferences;
use tracing::debug;

use crate::platform::platform_store;

pub fn use_preferences() -> Signal<Preferences> {
    use_context::<Signal<Preferences>>()
}

/// Loads preferences from storage, saves them on every change, and applies
/// dark mode and the document language to the wrapped tree.
#[component]
pub fn PreferencesProvider(children: Element) -> Element {
    let prefs = use_signal(|| Preferences::load(&platform_store()));

    use_effect(move || {
        let current = prefs();
        debug!(dark_mode = current.dark_mode, language = current.language.code(), "saving preferences");
        current.save(&platform_store());
    });

    use_context_provider(|| prefs);

    let current = prefs();
    rsx! {
        div {
            class: if current.dark_mode { "app dark" } else { "app" },
            lang: current.language.code(),
            {children}
        }
    }
}

//! Session context and hooks for the UI.

use api::{ApiClient, SessionState, SessionStore};
use dioxus::prelude::*;
use tracing::debug;

use crate::platform::{platform_store, PlatformStore};

/// The app-wide session: the store itself, a signal mirroring its state, and
/// the HTTP client every hook talks through.
#[derive(Clone)]
pub struct Session {
    pub store: SessionStore<PlatformStore>,
    pub state: Signal<SessionState>,
    pub client: ApiClient,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }
}

/// Get the current session.
/// Components re-render when `state` changes if they read it.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that restores the session from storage.
/// Wrap your app with this component before the router.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_hook(|| SessionStore::restore(platform_store()));
    let state = use_signal(|| store.snapshot());

    use_hook(|| {
        store.subscribe(move |snapshot| {
            let mut state = state;
            state.set(snapshot.clone());
        });
    });

    use_context_provider(|| {
        let client = ApiClient::from_env();
        debug!(base_url = client.base_url(), "session provider ready");
        Session {
            store: store.clone(),
            state,
            client,
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Clearing the session is enough: the access gate notices and redirects.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.store.logout(),
            "{label}"
        }
    }
}

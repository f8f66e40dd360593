//! Document list hook.

use api::{ApiClient, DocumentSync, DocumentsState};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::gate::{use_login_redirect, LoginRedirect};
use crate::platform::PlatformStore;

pub type AppDocuments = DocumentSync<ApiClient, PlatformStore, LoginRedirect>;

/// The signed-in user's documents plus a signal that tracks their state.
#[derive(Clone)]
pub struct Documents {
    pub sync: AppDocuments,
    pub state: Signal<DocumentsState>,
}

/// Load the document list on mount and keep `state` in step with every
/// listing and mutation made through `sync`.
pub fn use_documents() -> Documents {
    let documents = use_document_sync();

    use_future({
        let sync = documents.sync.clone();
        move || {
            let sync = sync.clone();
            async move {
                let _ = sync.fetch_all().await;
            }
        }
    });

    documents
}

/// A [`DocumentSync`] handle for pages that act on single documents. Nothing
/// is listed until the caller asks for it.
pub fn use_document_sync() -> Documents {
    let session = use_session();
    let redirect = use_login_redirect();
    let sync = use_hook(|| {
        DocumentSync::new(session.client.clone(), session.store.clone(), redirect)
    });
    let state = use_signal(|| sync.state());

    use_hook({
        let sync = sync.clone();
        move || {
            sync.subscribe(move |snapshot| {
                let mut state = state;
                state.set(snapshot.clone());
            })
        }
    });

    Documents { sync, state }
}

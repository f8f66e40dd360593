//! Per-document conversation hook.

use api::{ApiClient, Conversation, ConversationState};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::gate::{use_login_redirect, LoginRedirect};
use crate::platform::PlatformStore;

pub type AppConversation = Conversation<ApiClient, PlatformStore, LoginRedirect>;

#[derive(Clone)]
pub struct Chat {
    pub conversation: AppConversation,
    pub state: Signal<ConversationState>,
}

/// Open a conversation about `document_id` and mirror its transcript.
///
/// The conversation stays bound to the first id it was called with. Callers
/// that can change documents render under `key: "{id}"` so a new id mounts a
/// new conversation.
pub fn use_conversation(document_id: String) -> Chat {
    let session = use_session();
    let redirect = use_login_redirect();
    let conversation = use_hook(|| {
        Conversation::new(
            session.client.clone(),
            session.store.clone(),
            redirect,
            document_id,
        )
    });
    let state = use_signal(|| conversation.state());

    use_hook({
        let conversation = conversation.clone();
        move || {
            conversation.subscribe(move |snapshot| {
                let mut state = state;
                state.set(snapshot.clone());
            })
        }
    });

    use_future({
        let conversation = conversation.clone();
        move || {
            let conversation = conversation.clone();
            async move {
                let _ = conversation.open().await;
            }
        }
    });

    Chat {
        conversation,
        state,
    }
}

//! Pick a document to chat about.

use dioxus::prelude::*;
use ui::{use_documents, Spinner};

use crate::Route;

#[component]
pub fn Chats() -> Element {
    let docs = use_documents();
    let state = docs.state.cloned();
    let available = state.documents.len();

    rsx! {
        div {
            class: "chats",
            h1 { "Chats" }
            p { class: "muted", "Choose a document to ask questions about." }
            if let Some(err) = state.error.clone() {
                div { class: "form-error", "Could not load documents: {err}" }
            }
            if state.loading && state.documents.is_empty() {
                Spinner {}
            } else if state.documents.is_empty() {
                div {
                    class: "empty",
                    p { "No documents yet." }
                    Link { to: Route::Documents {}, "Upload one in Documents" }
                }
            } else {
                h2 { "Available documents ({available})" }
                ul {
                    class: "chat-picker",
                    for document in state.documents.clone() {
                        li {
                            key: "{document.id}",
                            Link {
                                to: Route::Chat { id: document.id.clone() },
                                strong { "{document.filename}" }
                                span { class: "muted", " {document.created_at}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

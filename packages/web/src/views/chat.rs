use api::{Asked, ChatMessage, Sender};
use dioxus::prelude::*;
use ui::{use_conversation, Spinner};

use crate::Route;

/// Keyed on the id so switching documents starts a fresh conversation.
#[component]
pub fn Chat(id: String) -> Element {
    rsx! {
        ChatPanel { key: "{id}", id: id.clone() }
    }
}

#[component]
fn ChatPanel(id: String) -> Element {
    let chat = use_conversation(id);
    let mut input = use_signal(String::new);
    let state = chat.state.cloned();

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let conversation = chat.conversation.clone();
        async move {
            let question = input();
            if !conversation.accepts(&question) {
                return;
            }
            input.set(String::new());
            if let Ok(Asked::Ignored) = conversation.ask(&question).await {
                input.set(question);
            }
        }
    };

    if state.loading {
        return rsx! { Spinner {} };
    }

    if let (Some(err), None) = (&state.error, &state.document) {
        return rsx! {
            div {
                class: "p-8 form-error",
                p { "Error: {err}" }
                Link { to: Route::Documents {}, "Back to documents" }
            }
        };
    }

    let title = state
        .document
        .as_ref()
        .map(|d| d.filename.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "chat",
            h1 { "{title}" }
            div {
                class: "chat-messages",
                for message in state.messages.clone() {
                    MessageBubble { key: "{message.id}", message }
                }
                if state.sending {
                    div { class: "chat-message assistant typing", "..." }
                }
            }
            form {
                class: "chat-input",
                onsubmit: send,
                textarea {
                    placeholder: "Ask something about the document",
                    value: input(),
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: state.sending || input().trim().is_empty(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let time = message.sent_at.format("%H:%M").to_string();
    rsx! {
        div {
            class: match message.sender {
                Sender::User => "chat-message user",
                Sender::Assistant => "chat-message assistant",
            },
            p { "{message.text}" }
            span { class: "chat-time", "{time}" }
        }
    }
}

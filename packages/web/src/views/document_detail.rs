use api::models::Analysis;
use api::Document;
use dioxus::prelude::*;
use ui::{notify_result, use_document_sync, use_notifications, Spinner};

use crate::Route;

/// One document: its link, metadata and an on-demand AI summary.
#[component]
pub fn DocumentDetail(id: String) -> Element {
    rsx! {
        DocumentPanel { key: "{id}", id: id.clone() }
    }
}

#[component]
fn DocumentPanel(id: String) -> Element {
    let docs = use_document_sync();
    let mut notices = use_notifications();
    let mut analysis = use_signal(|| Option::<Analysis>::None);
    let mut analyzing = use_signal(|| false);

    let document = use_resource({
        let sync = docs.sync.clone();
        let id = id.clone();
        move || {
            let sync = sync.clone();
            let id = id.clone();
            async move { sync.get(&id).await }
        }
    });

    let analyze = {
        let sync = docs.sync.clone();
        move |document: Document| {
            let sync = sync.clone();
            spawn(async move {
                analyzing.set(true);
                let result = sync.analyze(&document).await;
                notify_result(&mut notices, &result, "Analysis ready");
                if let Ok(found) = result {
                    analysis.set(Some(found));
                }
                analyzing.set(false);
            });
        }
    };

    let loaded = document.cloned();
    match loaded {
        None => rsx! { Spinner {} },
        Some(Err(err)) => rsx! {
            div {
                class: "p-8 form-error",
                p { "Error: {err}" }
                Link { to: Route::Documents {}, "Back to documents" }
            }
        },
        Some(Ok(doc)) => rsx! {
            div {
                class: "document-detail",
                h1 { "{doc.filename}" }
                p { "Uploaded {doc.created_at}" }
                a { href: "{doc.s3_url}", target: "_blank", "Open file" }
                div {
                    class: "actions",
                    Link { to: Route::Chat { id: doc.id.clone() }, "Ask about this document" }
                    button {
                        disabled: analyzing(),
                        onclick: {
                            let doc = doc.clone();
                            let analyze = analyze.clone();
                            move |_| analyze(doc.clone())
                        },
                        if analyzing() { "Analyzing..." } else { "Analyze" }
                    }
                }
                if let Some(result) = analysis() {
                    section {
                        class: "analysis",
                        h2 { "Summary" }
                        p { "{result.respuesta}" }
                    }
                }
            }
        },
    }
}

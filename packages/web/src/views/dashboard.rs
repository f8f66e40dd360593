//! Landing page after login: totals, uploads per user and the newest documents.

use api::dashboard::DashboardSummary;
use dioxus::prelude::*;
use ui::{use_documents, use_session, use_users, Spinner};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let docs = use_documents();
    let users = use_users();
    let state = docs.state.cloned();
    let accounts = users.state.read().users.len();
    let me = session.state.read().user.clone();

    if state.loading && state.documents.is_empty() {
        return rsx! { Spinner {} };
    }

    let summary = DashboardSummary::from_documents(&state.documents);
    let label = move |user_id: &str| match &me {
        Some(user) if user.id == user_id => format!("{} (you)", user.username),
        _ => users.directory.username_for(user_id),
    };
    let per_user: Vec<(String, usize)> = summary
        .per_user
        .iter()
        .map(|c| (label(c.user_id.as_str()), c.documents))
        .collect();
    let uploaders = per_user.len();
    let busiest = per_user.first().map(|(_, n)| *n).unwrap_or(1).max(1);

    rsx! {
        div {
            class: "dashboard",
            h1 { "Dashboard" }
            if let Some(err) = state.error.clone() {
                div { class: "form-error", "{err}" }
            }
            div {
                class: "dashboard-stats",
                div { class: "stat", span { class: "stat-value", "{summary.total}" } span { "Documents" } }
                div { class: "stat", span { class: "stat-value", "{uploaders}" } span { "Uploaders" } }
                if accounts > 0 {
                    div { class: "stat", span { class: "stat-value", "{accounts}" } span { "Accounts" } }
                }
            }
            section {
                class: "card",
                h2 { "Documents per user" }
                if per_user.is_empty() {
                    p { class: "muted", "No uploads yet." }
                }
                for (name, count) in per_user.clone() {
                    div {
                        key: "{name}",
                        class: "bar-row",
                        span { class: "bar-label", "{name}" }
                        div {
                            class: "bar",
                            style: format!("width: {}%", count * 100 / busiest),
                        }
                        span { class: "bar-count", "{count}" }
                    }
                }
            }
            section {
                class: "card",
                h2 { "Recent documents" }
                if summary.recent.is_empty() {
                    p { class: "muted", "Nothing uploaded yet." }
                }
                ul {
                    for document in summary.recent.clone() {
                        li {
                            key: "{document.id}",
                            Link { to: Route::Chat { id: document.id.clone() }, "{document.filename}" }
                            span { class: "muted", " {document.created_at}" }
                        }
                    }
                }
                Link { to: Route::Documents {}, "View all documents" }
            }
        }
    }
}

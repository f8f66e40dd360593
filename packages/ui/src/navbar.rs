use dioxus::prelude::*;

use crate::toasts::NotificationBell;
use crate::auth::{use_session, LogoutButton};

/// Top bar for signed-in pages. `children` are the app's navigation links.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let username = session
        .state
        .read()
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "navbar",
            span { class: "navbar-brand", "DocMind" }
            nav { class: "navbar-links", {children} }
            div {
                class: "navbar-user",
                span { "{username}" }
                NotificationBell {}
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}

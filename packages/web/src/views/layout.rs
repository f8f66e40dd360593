//! Route layouts: the access gate around everything, and the signed-in shell.

use dioxus::prelude::*;
use ui::{AccessGate, LoginRedirect, Navbar};

use crate::Route;

/// Provides [`LoginRedirect`] for the hooks below and gates every route on
/// the session. `/auth/*` stays reachable while signed out.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let to_login = use_callback(move |()| {
        nav.replace(Route::Login {});
    });
    use_context_provider(|| LoginRedirect(to_login));

    let route = use_route::<Route>();

    rsx! {
        AccessGate {
            path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::Documents {}, "Documents" }
            Link { to: Route::Chats {}, "Chats" }
            Link { to: Route::Users {}, "Users" }
            Link { to: Route::Settings {}, "Settings" }
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "p-8",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}

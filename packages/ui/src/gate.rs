//! Client-side route guard.

use api::gate::{check_access, Access};
use api::Navigate;
use dioxus::prelude::*;
use tracing::debug;

use crate::auth::use_session;

/// How the app sends someone to the login page.
///
/// The router lives in the app crate, so it provides this context and
/// everything here stays router-agnostic.
#[derive(Clone, Copy)]
pub struct LoginRedirect(pub Callback<()>);

impl Navigate for LoginRedirect {
    fn to_login(&self) {
        self.0.call(());
    }
}

pub fn use_login_redirect() -> LoginRedirect {
    use_context::<LoginRedirect>()
}

/// Renders `children` only for signed-in users, or on public `/auth` pages.
/// Anyone else sees a spinner while being redirected to login.
#[component]
pub fn AccessGate(path: String, children: Element) -> Element {
    let session = use_session();
    let redirect = use_login_redirect();
    let state = session.state;

    use_effect(use_reactive((&path,), move |(path,)| {
        let authenticated = state.read().is_authenticated();
        if check_access(authenticated, &path) == Access::RedirectToLogin {
            debug!(%path, "not signed in, redirecting to login");
            redirect.to_login();
        }
    }));

    match check_access(session.is_authenticated(), &path) {
        Access::Render => rsx! {
            {children}
        },
        Access::RedirectToLogin => rsx! {
            Spinner {}
        },
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center h-screen",
            div { class: "spinner", aria_label: "Loading" }
        }
    }
}

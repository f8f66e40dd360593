use dioxus::prelude::*;

use ui::{NotificationProvider, PreferencesProvider, SessionProvider};
use views::{
    AppLayout, Chat, Chats, Dashboard, DocumentDetail, Documents, Login, NotFound, Register,
    Settings, Shell, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/auth/login")]
        Login {},
        #[route("/auth/register")]
        Register {},
        #[layout(Shell)]
            #[route("/home/dashboard")]
            Dashboard {},
            #[route("/home/documents")]
            Documents {},
            #[route("/home/documents/:id")]
            DocumentDetail { id: String },
            #[route("/home/chats")]
            Chats {},
            #[route("/home/chats/:id")]
            Chat { id: String },
            #[route("/home/users")]
            Users {},
            #[route("/home/config")]
            Settings {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            PreferencesProvider {
                NotificationProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to the dashboard; the gate sends anonymous users on to login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Dashboard {});
    });
    rsx! {}
}

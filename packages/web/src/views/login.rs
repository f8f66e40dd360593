//! Login page view with email/password form.

use api::models::LoginRequest;
use api::ApiError;
use dioxus::prelude::*;
use tracing::info;
use ui::{notify, use_notifications, use_session, Tone};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notifications();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the documents.
    let authenticated = session.is_authenticated();
    use_effect(use_reactive((&authenticated,), move |(authenticated,)| {
        if authenticated {
            nav.replace(Route::Documents {});
        }
    }));

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            if request.email.is_empty() || request.password.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::auth::login(&session.client, &session.store, &request).await {
                Ok(user) => {
                    info!(user_id = %user.id, "login succeeded");
                    notify(
                        &mut notices,
                        Tone::Success,
                        &format!("Hello {}!", user.username),
                    );
                    nav.push(Route::Dashboard {});
                }
                Err(ApiError::InvalidCredentials) => {
                    loading.set(false);
                    error.set(Some("Invalid email or password".to_string()));
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            h1 { class: "mb-2 font-bold text-[1.75rem]", "DocMind" }
            p { class: "mb-8 text-[0.9375rem]", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm",
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}

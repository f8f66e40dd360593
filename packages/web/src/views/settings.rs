//! Profile and preferences.

use api::models::ProfilePatch;
use dioxus::prelude::*;
use store::Language;
use ui::{notify_result, use_notifications, use_login_redirect, use_preferences, use_session};

#[component]
pub fn Settings() -> Element {
    rsx! {
        div {
            class: "settings",
            h1 { "Settings" }
            ProfileSection {}
            PreferencesSection {}
        }
    }
}

#[component]
fn ProfileSection() -> Element {
    let session = use_session();
    let redirect = use_login_redirect();
    let mut notices = use_notifications();
    let current = session.state.read().user.clone();
    let mut username = use_signal(|| current.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let mut email = use_signal(|| current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut saving = use_signal(|| false);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        async move {
            let patch = ProfilePatch {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
            };
            if patch.username.is_empty() || patch.email.is_empty() {
                return;
            }
            saving.set(true);
            let result =
                api::profile::update_profile(&session.client, &session.store, &redirect, &patch)
                    .await;
            notify_result(&mut notices, &result, "Profile updated");
            saving.set(false);
        }
    };

    let role = current.map(|u| u.role.as_str()).unwrap_or_default();

    rsx! {
        section {
            h2 { "Profile" }
            p { class: "muted", "Role: {role}" }
            form {
                onsubmit: save,
                input {
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

#[component]
fn PreferencesSection() -> Element {
    let mut prefs = use_preferences();
    let current = prefs();

    rsx! {
        section {
            h2 { "Preferences" }
            label {
                input {
                    r#type: "checkbox",
                    checked: current.dark_mode,
                    onchange: move |evt: FormEvent| {
                        let on = evt.checked();
                        prefs.set(prefs().with_dark_mode(on));
                    },
                }
                " Dark mode"
            }
            label {
                "Language "
                select {
                    value: current.language.code(),
                    onchange: move |evt: FormEvent| {
                        if let Some(language) = Language::from_code(&evt.value()) {
                            prefs.set(prefs().with_language(language));
                        }
                    },
                    for language in [Language::Es, Language::En] {
                        option { value: language.code(), {language.label()} }
                    }
                }
            }
        }
    }
}

//! Admin-only user management.

use api::models::NewUser;
use api::{Role, UserInfo};
use dioxus::prelude::*;
use ui::{notify_result, use_notifications, use_session, use_users, Spinner, Users as UsersHandle};

#[component]
pub fn Users() -> Element {
    let session = use_session();
    let users = use_users();
    use_context_provider(|| users.clone());
    let is_admin = session
        .state
        .read()
        .user
        .as_ref()
        .is_some_and(UserInfo::is_admin);

    if !is_admin {
        return rsx! {
            div { class: "p-8", p { "Only administrators can manage users." } }
        };
    }

    let state = users.state.cloned();

    rsx! {
        div {
            class: "users",
            h1 { "Users" }
            NewUserForm {}
            if let Some(err) = state.error.clone() {
                div { class: "form-error", "{err}" }
            }
            if state.loading && state.users.is_empty() {
                Spinner {}
            } else {
                table {
                    thead {
                        tr {
                            th { "Username" }
                            th { "Email" }
                            th { "Role" }
                            th { "" }
                        }
                    }
                    tbody {
                        for user in state.users.clone() {
                            UserRow { key: "{user.id}", user }
                        }
                    }
                }
            }
        }
    }
}

fn parse_role(value: &str) -> Role {
    match value {
        "admin" => Role::Admin,
        _ => Role::Empleado,
    }
}

#[component]
fn UserRow(user: UserInfo) -> Element {
    let directory = use_context::<UsersHandle>().directory;
    let mut notices = use_notifications();
    let id = user.id.clone();

    let change_role = {
        let directory = directory.clone();
        let id = id.clone();
        move |evt: FormEvent| {
            let directory = directory.clone();
            let id = id.clone();
            async move {
                let role = parse_role(&evt.value());
                let result = directory.update_role(&id, role).await;
                notify_result(&mut notices, &result, "Role updated");
            }
        }
    };

    let delete = move |_| {
        let directory = directory.clone();
        let id = id.clone();
        async move {
            let result = directory.delete(&id).await;
            notify_result(&mut notices, &result, "User deleted");
        }
    };

    rsx! {
        tr {
            td { "{user.username}" }
            td { "{user.email}" }
            td {
                select {
                    value: user.role.as_str(),
                    onchange: change_role,
                    option { value: "empleado", "Employee" }
                    option { value: "admin", "Admin" }
                }
            }
            td {
                button { class: "danger", onclick: delete, "Delete" }
            }
        }
    }
}

#[component]
fn NewUserForm() -> Element {
    let directory = use_context::<UsersHandle>().directory;
    let mut notices = use_notifications();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Empleado);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let directory = directory.clone();
        async move {
            let user = NewUser {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: role(),
            };
            if user.username.is_empty() || user.email.is_empty() || user.password.is_empty() {
                return;
            }
            let result = directory.create(&user).await;
            notify_result(&mut notices, &result, "User created");
            if result.is_ok() {
                username.set(String::new());
                email.set(String::new());
                password.set(String::new());
            }
        }
    };

    rsx! {
        form {
            class: "new-user",
            onsubmit: submit,
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
            input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            select {
                value: role().as_str(),
                onchange: move |evt: FormEvent| role.set(parse_role(&evt.value())),
                option { value: "empleado", "Employee" }
                option { value: "admin", "Admin" }
            }
            button { r#type: "submit", "Add user" }
        }
    }
}

use dioxus::prelude::*;

use crate::notifications::{use_notifications, Notice, Notifications, Tone};

/// Provides the notification context. Toasts and the history drawer render
/// after `children`.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        {children}
        ToastStack {}
        NotificationHistory {}
    }
}

#[component]
fn ToastStack() -> Element {
    let toasts = use_notifications().read().toasts();
    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            for notice in toasts {
                Toast { key: "{notice.id}", notice }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice) -> Element {
    let mut notifications = use_notifications();
    let id = notice.id;
    let tone = notice.tone.css();
    let summary = match notice.tone {
        Tone::Error => "Something went wrong",
        Tone::Success => "Done",
        Tone::Info => "Heads up",
    };

    rsx! {
        div {
            class: "toast toast-{tone}",
            div {
                class: "toast-body",
                strong { "{summary}" }
                p { "{notice.message}" }
            }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| notifications.write().dismiss(id),
                "×"
            }
        }
    }
}

/// Drawer listing every notice. Failures are grouped above the rest.
#[component]
fn NotificationHistory() -> Element {
    let mut notifications = use_notifications();
    if !notifications.read().history_open {
        return rsx! {};
    }

    let (failures, rest): (Vec<Notice>, Vec<Notice>) = notifications
        .read()
        .history()
        .into_iter()
        .partition(|n| n.tone == Tone::Error);

    rsx! {
        aside {
            class: "notification-history",
            header {
                h3 { "Activity" }
                button { onclick: move |_| notifications.write().dismiss_all(), "Mark all seen" }
                button { onclick: move |_| notifications.write().clear(), "Clear" }
                button { onclick: move |_| notifications.write().history_open = false, "Close" }
            }
            if failures.is_empty() && rest.is_empty() {
                p { class: "muted", "Nothing yet." }
            }
            if !failures.is_empty() {
                section {
                    class: "history-failures",
                    h4 { "Failed" }
                    for notice in failures {
                        div {
                            key: "{notice.id}",
                            class: if notice.dismissed { "history-row seen" } else { "history-row" },
                            time { "{notice.at}" }
                            if let Some(status) = notice.status {
                                span { class: "status-badge", "HTTP {status}" }
                            }
                            span { "{notice.message}" }
                        }
                    }
                }
            }
            if !rest.is_empty() {
                section {
                    h4 { "Completed" }
                    for notice in rest {
                        div {
                            key: "{notice.id}",
                            class: format!("history-row {}", notice.tone.css()),
                            time { "{notice.at}" }
                            span { "{notice.message}" }
                        }
                    }
                }
            }
        }
    }
}

/// Navbar button that opens the history. Shows how many failures are unseen.
#[component]
pub fn NotificationBell() -> Element {
    let mut notifications = use_notifications();
    let unseen = notifications.read().unseen_errors();

    rsx! {
        button {
            class: if unseen > 0 { "notification-bell alert" } else { "notification-bell" },
            title: "Activity",
            onclick: move |_| {
                let open = notifications.read().history_open;
                notifications.write().history_open = !open;
            },
            "Activity"
            if unseen > 0 {
                span { class: "bell-count", "{unseen}" }
            }
        }
    }
}

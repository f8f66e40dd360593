//! Document list: upload, Drive import, rename, delete, and links to chat.

use api::models::{DriveImport, UpdateDocument, Upload};
use api::Document;
use dioxus::prelude::*;
use ui::{notify_result, use_notifications, use_documents, Spinner};

use crate::Route;

#[component]
pub fn Documents() -> Element {
    let docs = use_documents();
    use_context_provider(|| docs.clone());
    let mut notices = use_notifications();
    let state = docs.state.cloned();

    let upload_sync = docs.sync.clone();
    let on_files = move |evt: FormEvent| {
        let sync = upload_sync.clone();
        async move {
            let Some(engine) = evt.files() else {
                return;
            };
            for name in engine.files() {
                let Some(bytes) = engine.read_file(&name).await else {
                    tracing::warn!(%name, "could not read selected file");
                    continue;
                };
                let result = sync.upload(&Upload::new(name.clone(), bytes)).await;
                notify_result(&mut notices, &result, &format!("{name} uploaded"));
            }
        }
    };

    rsx! {
        div {
            class: "documents",
            div {
                class: "documents-toolbar",
                h1 { "Documents" }
                label {
                    class: "upload-button",
                    if state.uploading() {
                        "Uploading ({state.uploads_in_flight})..."
                    } else {
                        "Upload files"
                    }
                    input {
                        r#type: "file",
                        multiple: true,
                        hidden: true,
                        onchange: on_files,
                    }
                }
            }

            DriveImportForm {}

            if let Some(err) = state.error.clone() {
                div { class: "form-error", "{err}" }
            }

            if state.loading && state.documents.is_empty() {
                Spinner {}
            } else if state.documents.is_empty() {
                p { class: "empty", "No documents yet." }
            } else {
                table {
                    class: "documents-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Uploaded" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for document in state.documents.clone() {
                            DocumentRow {
                                key: "{document.id}",
                                document: document.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentRow(document: Document) -> Element {
    let sync = use_context::<ui::Documents>().sync;
    let mut notices = use_notifications();
    let mut editing = use_signal(|| false);
    let mut new_name = use_signal(|| document.filename.clone());
    let id = document.id.clone();

    let rename = {
        let sync = sync.clone();
        let id = id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let sync = sync.clone();
            let id = id.clone();
            async move {
                let name = new_name().trim().to_string();
                if name.is_empty() {
                    return;
                }
                let result = sync.update(&id, &UpdateDocument::rename(name)).await;
                notify_result(&mut notices, &result, "Document renamed");
                if result.is_ok() {
                    editing.set(false);
                }
            }
        }
    };

    let delete = {
        let sync = sync.clone();
        let id = id.clone();
        move |_| {
            let sync = sync.clone();
            let id = id.clone();
            async move {
                let result = sync.delete(&id).await;
                notify_result(&mut notices, &result, "Document deleted");
            }
        }
    };

    rsx! {
        tr {
            td {
                if editing() {
                    form {
                        onsubmit: rename,
                        input {
                            value: new_name(),
                            oninput: move |evt: FormEvent| new_name.set(evt.value()),
                        }
                        button { r#type: "submit", "Save" }
                        button {
                            r#type: "button",
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                } else {
                    Link { to: Route::DocumentDetail { id: id.clone() }, "{document.filename}" }
                }
            }
            td { "{document.created_at}" }
            td {
                class: "actions",
                Link { to: Route::Chat { id: id.clone() }, "Chat" }
                button { onclick: move |_| editing.set(true), "Rename" }
                button { class: "danger", onclick: delete, "Delete" }
            }
        }
    }
}

/// Import a Google Drive file by id, using a Google access token the user
/// already holds.
#[component]
fn DriveImportForm() -> Element {
    let sync = use_context::<ui::Documents>().sync;
    let mut notices = use_notifications();
    let mut file_id = use_signal(String::new);
    let mut google_token = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let sync = sync.clone();
        async move {
            let import = DriveImport {
                file_id: file_id().trim().to_string(),
                access_token: google_token().trim().to_string(),
            };
            if import.file_id.is_empty() || import.access_token.is_empty() {
                return;
            }
            let result = sync.import_from_drive(&import).await;
            notify_result(&mut notices, &result, "Imported from Google Drive");
            if result.is_ok() {
                file_id.set(String::new());
            }
        }
    };

    rsx! {
        details {
            class: "drive-import",
            summary { "Import from Google Drive" }
            form {
                onsubmit: submit,
                input {
                    placeholder: "Drive file id",
                    value: file_id(),
                    oninput: move |evt: FormEvent| file_id.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Google access token",
                    value: google_token(),
                    oninput: move |evt: FormEvent| google_token.set(evt.value()),
                }
                button { r#type: "submit", "Import" }
            }
        }
    }
}

//! # API crate: client core for DocMind
//!
//! Everything the front end knows about the backend and about the signed-in
//! user lives here, free of any UI framework so it runs and tests natively.
//! The `ui` crate wraps these types in Dioxus contexts and signals.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login and registration flows that feed the session |
//! | [`backend`] | Traits the logic calls the REST API through |
//! | [`client`] | `reqwest` implementation of those traits |
//! | [`config`] | Backend base URL from the environment |
//! | [`conversation`] | Per-document chat transcript |
//! | [`dashboard`] | Summaries for the landing page |
//! | [`error`] | The crate-wide [`ApiError`] |
//! | [`gate`] | Route access decision for protected pages |
//! | [`models`] | Wire types: documents, users, chat payloads |
//! | [`profile`] | Self-service name and email changes |
//! | [`session`] | Credential and identity holder, 401 handling |
//! | [`sync`] | Cached document and user lists kept in step with the backend |
//!
//! ## 401 handling
//!
//! A 401 from any protected call is routed through
//! [`SessionStore::intercept`] together with the credential the request
//! carried. If that credential is still the current one, stored credentials
//! are cleared and the [`Navigate`] implementation is sent to the login route.
//! Callers receive [`ApiError::Unauthorized`] either way so they can stop what
//! they were doing.

pub mod auth;
pub mod backend;
pub mod client;
pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod error;
pub mod gate;
pub mod models;
pub mod profile;
pub mod session;
mod shared;
pub mod sync;

#[cfg(test)]
mod testing;

pub use backend::{AuthBackend, ChatBackend, DocumentBackend, UserBackend};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use conversation::{Asked, ChatMessage, Conversation, ConversationState, Sender};
pub use error::ApiError;
pub use gate::{check_access, Access};
pub use models::{Document, Role, UserInfo};
pub use session::{Navigate, SessionState, SessionStore};
pub use shared::Shared;
pub use sync::{DocumentSync, DocumentsState, UserDirectory, UsersState};

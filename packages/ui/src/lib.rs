//! Shared UI for DocMind: contexts, hooks and a few building-block components.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`SessionProvider`] / [`use_session`] | Restored session, its state signal, the API client |
//! | [`AccessGate`] / [`LoginRedirect`] | Route guard; the app supplies how to reach login |
//! | [`use_documents`] / [`use_document_sync`] | Document list synced with the backend, or just the handle |
//! | [`use_users`] | Admin user directory |
//! | [`use_conversation`] | Chat transcript for one document |
//! | [`PreferencesProvider`] / [`use_preferences`] | Dark mode and language |
//! | [`NotificationProvider`] / [`notify_result`] | Toasts and an activity history |

mod platform;
pub use platform::{platform_store, PlatformStore};

mod auth;
pub use auth::{use_session, LogoutButton, Session, SessionProvider};

mod gate;
pub use gate::{use_login_redirect, AccessGate, LoginRedirect, Spinner};

mod documents;
pub use documents::{use_document_sync, use_documents, AppDocuments, Documents};

mod users;
pub use users::{use_users, AppUsers, Users};

mod chat;
pub use chat::{use_conversation, AppConversation, Chat};

mod preferences;
pub use preferences::{use_preferences, PreferencesProvider};

pub mod notifications;
pub use notifications::{notify, notify_result, use_notifications, Notifications, Tone};

mod toasts;
pub use toasts::{NotificationBell, NotificationProvider};

mod navbar;
pub use navbar::Navbar;

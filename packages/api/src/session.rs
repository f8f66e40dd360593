//! # Session store
//!
//! [`SessionStore`] is the single owner of "who is signed in". It keeps the
//! bearer credential and the [`UserInfo`] in memory and mirrors them to durable
//! storage under [`keys::ACCESS_TOKEN`] and [`keys::USER`]. Every other part of
//! the client reads the credential through it; nothing else touches those keys.
//!
//! The store is constructed once at the application root and passed down
//! (Dioxus context in the app, plain values in tests). Clones share state.
//!
//! ## Lifecycle
//!
//! | Event | Memory | Storage |
//! |-------|--------|---------|
//! | [`restore`](SessionStore::restore) | loaded if both keys are present and the user parses | read only |
//! | [`login`](SessionStore::login) | credential + user set | both keys written |
//! | [`update_user`](SessionStore::update_user) | user replaced | `user` rewritten |
//! | [`logout`](SessionStore::logout) | cleared | `access_token` removed, then `user` |
//! | [`expire`](SessionStore::expire) | as logout, then the navigator is sent to login | as logout |
//!
//! Restoring never contacts the backend; a stale token is only discovered when
//! a protected call comes back 401.
//!
//! A 401 only ends the session whose credential was sent with the request.
//! If the user signed out and back in while the request was in flight, the
//! late rejection belongs to a session that no longer exists and is ignored.

use store::{keys, KeyValueStore};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::models::{AuthResponse, UserInfo};
use crate::shared::Shared;

/// Sends the user to the login route.
///
/// Any `Fn()` closure is a navigator, which is how the UI plugs in its router.
pub trait Navigate {
    fn to_login(&self);
}

impl<F: Fn()> Navigate for F {
    fn to_login(&self) {
        self()
    }
}

/// In-memory view of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub credential: Option<String>,
    pub user: Option<UserInfo>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Credential and identity holder shared across the app.
pub struct SessionStore<S> {
    storage: S,
    state: Shared<SessionState>,
}

impl<S: Clone> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Build a store from whatever durable storage holds.
    pub fn restore(storage: S) -> Self {
        let state = match (storage.get(keys::ACCESS_TOKEN), storage.get(keys::USER)) {
            (Some(token), Some(raw)) => match serde_json::from_str::<UserInfo>(&raw) {
                Ok(user) => {
                    debug!(user_id = %user.id, "restored session from storage");
                    SessionState {
                        credential: Some(token),
                        user: Some(user),
                    }
                }
                Err(e) => {
                    warn!("ignoring unreadable stored user: {}", e);
                    SessionState::default()
                }
            },
            _ => SessionState::default(),
        };
        Self {
            storage,
            state: Shared::new(state),
        }
    }

    /// Store a fresh login in memory and in durable storage.
    pub fn login(&self, response: AuthResponse) {
        let AuthResponse { access_token, user } = response;
        self.storage.set(keys::ACCESS_TOKEN, &access_token);
        self.persist_user(&user);
        info!(user_id = %user.id, role = user.role.as_str(), "signed in");
        self.state.update(|s| {
            s.credential = Some(access_token);
            s.user = Some(user);
        });
    }

    /// Forget the session. The credential goes first, then the identity.
    pub fn logout(&self) {
        self.storage.remove(keys::ACCESS_TOKEN);
        self.storage.remove(keys::USER);
        info!("signed out");
        self.state.update(|s| {
            s.credential = None;
            s.user = None;
        });
    }

    /// React to a rejected credential: log out, then go to the login route.
    ///
    /// Nothing happens unless `token` is still the current credential.
    /// Returns whether the session was ended.
    pub fn expire(&self, token: &str, navigator: &impl Navigate) -> bool {
        if self.credential().as_deref() != Some(token) {
            debug!("ignoring 401 for a credential that is no longer current");
            return false;
        }
        warn!("credential rejected by backend, ending session");
        self.logout();
        navigator.to_login();
        true
    }

    /// Pass a backend result through, expiring the session on 401.
    ///
    /// `token` is the credential the request was sent with.
    pub fn intercept<T>(
        &self,
        result: Result<T, ApiError>,
        token: &str,
        navigator: &impl Navigate,
    ) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized) = &result {
            self.expire(token, navigator);
        }
        result
    }

    /// Edit the signed-in identity locally and persist it. Returns the new
    /// identity, or `None` when nobody is signed in.
    pub fn update_user(&self, edit: impl FnOnce(&mut UserInfo)) -> Option<UserInfo> {
        let mut user = self.user()?;
        edit(&mut user);
        self.persist_user(&user);
        let updated = user.clone();
        self.state.update(|s| s.user = Some(user));
        Some(updated)
    }

    fn persist_user(&self, user: &UserInfo) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(keys::USER, &raw),
            Err(e) => warn!("could not serialize user: {}", e),
        }
    }
}

impl<S> SessionStore<S> {
    pub fn credential(&self) -> Option<String> {
        self.state.with(|s| s.credential.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    /// Call `listener` after every change to the session.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        self.state.subscribe(listener);
    }
}

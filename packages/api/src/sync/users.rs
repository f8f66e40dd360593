use std::rc::Rc;

use store::KeyValueStore;
use tracing::{debug, error, info, warn};

use super::Generation;
use crate::backend::UserBackend;
use crate::error::ApiError;
use crate::models::{NewUser, Role, UserInfo};
use crate::session::{Navigate, SessionStore};
use crate::shared::Shared;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    pub users: Vec<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Admin view of every account, refreshed after each change.
pub struct UserDirectory<B, S, N> {
    backend: Rc<B>,
    session: SessionStore<S>,
    navigator: N,
    state: Shared<UsersState>,
    generation: Generation,
}

impl<B, S: Clone, N: Clone> Clone for UserDirectory<B, S, N> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            session: self.session.clone(),
            navigator: self.navigator.clone(),
            state: self.state.clone(),
            generation: self.generation.clone(),
        }
    }
}

impl<B, S, N> UserDirectory<B, S, N>
where
    B: UserBackend,
    S: KeyValueStore,
    N: Navigate,
{
    pub fn new(backend: B, session: SessionStore<S>, navigator: N) -> Self {
        Self {
            backend: Rc::new(backend),
            session,
            navigator,
            state: Shared::new(UsersState::default()),
            generation: Generation::default(),
        }
    }

    pub fn state(&self) -> UsersState {
        self.state.get()
    }

    pub fn users(&self) -> Vec<UserInfo> {
        self.state.with(|s| s.users.clone())
    }

    pub fn subscribe(&self, listener: impl Fn(&UsersState) + 'static) {
        self.state.subscribe(listener);
    }

    pub fn find(&self, id: &str) -> Option<UserInfo> {
        self.state
            .with(|s| s.users.iter().find(|u| u.id == id).cloned())
    }

    /// Display name for a user id, or a shortened id when the user is unknown.
    pub fn username_for(&self, id: &str) -> String {
        match self.find(id) {
            Some(user) => user.username,
            None => {
                let short: String = id.chars().take(8).collect();
                format!("{short}...")
            }
        }
    }

    fn token(&self) -> Result<String, ApiError> {
        self.session.credential().ok_or(ApiError::NotAuthenticated)
    }

    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        let Some(token) = self.session.credential() else {
            self.state.update(|s| s.loading = false);
            return Ok(());
        };

        let generation = self.generation.next();
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.backend.list_users(&token).await;
        let result = self.session.intercept(result, &token, &self.navigator);

        if !self.generation.is_current(generation) {
            debug!(generation, "discarding stale user listing");
            return result.map(|_| ());
        }

        match result {
            Ok(users) => {
                info!(count = users.len(), "users loaded");
                self.state.update(|s| {
                    s.users = users;
                    s.loading = false;
                });
                Ok(())
            }
            Err(ApiError::Unauthorized) => {
                self.state.update(|s| s.loading = false);
                Err(ApiError::Unauthorized)
            }
            Err(err) => {
                error!("Error fetching users: {}", err);
                let message = err.to_string();
                self.state.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    fn finish<T>(
        &self,
        result: Result<T, ApiError>,
        token: &str,
        action: &str,
    ) -> Result<T, ApiError> {
        self.session
            .intercept(result, token, &self.navigator)
            .inspect_err(|err| warn!("{action} failed: {}", err))
    }

    pub async fn create(&self, user: &NewUser) -> Result<(), ApiError> {
        let token = self.token()?;
        let result = self.backend.create_user(&token, user).await;
        self.finish(result, &token, "creating user")?;
        let _ = self.fetch_all().await;
        Ok(())
    }

    pub async fn update_role(&self, id: &str, role: Role) -> Result<(), ApiError> {
        let token = self.token()?;
        let result = self.backend.update_role(&token, id, role).await;
        self.finish(result, &token, "changing role")?;
        let _ = self.fetch_all().await;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let token = self.token()?;
        let result = self.backend.delete_user(&token, id).await;
        self.finish(result, &token, "deleting user")?;
        let _ = self.fetch_all().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_admin, sample_user, CountingNavigator, FakeBackend};
    use store::{keys, MemoryStore};

    fn directory(
        backend: &Rc<FakeBackend>,
    ) -> (
        UserDirectory<Rc<FakeBackend>, MemoryStore, CountingNavigator>,
        MemoryStore,
        CountingNavigator,
    ) {
        let storage = MemoryStore::new();
        let session = SessionStore::restore(storage.clone());
        session.login(crate::models::AuthResponse {
            access_token: "admintok".into(),
            user: sample_admin(),
        });
        let nav = CountingNavigator::default();
        (
            UserDirectory::new(Rc::clone(backend), session, nav.clone()),
            storage,
            nav,
        )
    }

    fn backend_with_users() -> Rc<FakeBackend> {
        let backend = FakeBackend::with_documents(vec![]);
        *backend.users.borrow_mut() = vec![sample_admin(), sample_user()];
        backend
    }

    #[tokio::test]
    async fn test_fetch_and_lookup() {
        let backend = backend_with_users();
        let (users, _, _) = directory(&backend);

        users.fetch_all().await.unwrap();

        assert_eq!(users.users().len(), 2);
        assert_eq!(users.find("1").map(|u| u.username), Some("A".into()));
        assert_eq!(users.username_for("0"), "root");
        assert_eq!(
            users.username_for("3f2a9c1e-77aa-4b1b"),
            "3f2a9c1e..."
        );
        assert_eq!(users.username_for("ab"), "ab...");
        assert_eq!(backend.calls(), ["list-users admintok"]);
    }

    #[tokio::test]
    async fn test_create_then_refetch() {
        let backend = backend_with_users();
        let (users, _, _) = directory(&backend);

        users
            .create(&NewUser {
                username: "bob".into(),
                email: "bob@b.com".into(),
                password: "secret".into(),
                role: Role::Empleado,
            })
            .await
            .unwrap();

        assert_eq!(
            backend.calls(),
            ["create-user bob@b.com admintok", "list-users admintok"]
        );
        assert_eq!(users.users().len(), 3);
    }

    #[tokio::test]
    async fn test_role_change_is_refetched() {
        let backend = backend_with_users();
        let (users, _, _) = directory(&backend);
        users.fetch_all().await.unwrap();

        users.update_role("1", Role::Admin).await.unwrap();

        assert!(users.find("1").is_some_and(|u| u.is_admin()));
        assert_eq!(backend.calls()[1], "update-role 1 admin admintok");
    }

    #[tokio::test]
    async fn test_delete_401_ends_session() {
        let backend = backend_with_users();
        let (users, storage, nav) = directory(&backend);
        users.fetch_all().await.unwrap();

        backend.fail_next(ApiError::Unauthorized);
        assert_eq!(users.delete("1").await, Err(ApiError::Unauthorized));

        assert_eq!(nav.count(), 1);
        assert!(storage.get(keys::ACCESS_TOKEN).is_none());
        assert_eq!(users.users().len(), 2);
    }

    #[tokio::test]
    async fn test_listing_error_is_recorded() {
        let backend = backend_with_users();
        let (users, _, nav) = directory(&backend);

        backend.fail_next(ApiError::Network("connection refused".into()));
        assert!(users.fetch_all().await.is_err());

        let state = users.state();
        assert!(state.error.is_some());
        assert!(!state.loading);
        assert_eq!(nav.count(), 0);
    }
}

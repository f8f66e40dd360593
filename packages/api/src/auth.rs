//! Sign-in and sign-up against the public `/auth` endpoints.

use store::KeyValueStore;
use tracing::{info, warn};

use crate::backend::AuthBackend;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, UserInfo};
use crate::session::SessionStore;

/// Exchange email and password for a session.
///
/// On success the session holds the new credential and identity. Wrong
/// credentials come back as [`ApiError::InvalidCredentials`] and leave the
/// session as it was.
pub async fn login<B, S>(
    backend: &B,
    session: &SessionStore<S>,
    request: &LoginRequest,
) -> Result<UserInfo, ApiError>
where
    B: AuthBackend,
    S: KeyValueStore,
{
    let response = backend
        .login(request)
        .await
        .inspect_err(|err| warn!(email = %request.email, "login failed: {}", err))?;
    let user = response.user.clone();
    session.login(response);
    Ok(user)
}

/// Create an account. The caller is expected to send the user to login next.
pub async fn register<B: AuthBackend>(backend: &B, request: &RegisterRequest) -> Result<(), ApiError> {
    backend
        .register(request)
        .await
        .inspect_err(|err| warn!(email = %request.email, "registration failed: {}", err))?;
    info!(username = %request.username, "account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_user, FakeBackend};
    use store::{keys, MemoryStore};

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest {
            email: "a@b.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let backend = FakeBackend::with_documents(vec![]);
        backend
            .passwords
            .borrow_mut()
            .insert("a@b.com".into(), "pw".into());
        let storage = MemoryStore::new();
        let session = SessionStore::restore(storage.clone());

        let user = login(&backend, &session, &credentials("pw")).await.unwrap();

        assert_eq!(user, sample_user());
        assert!(session.is_authenticated());
        assert_eq!(storage.get(keys::ACCESS_TOKEN).as_deref(), Some("tok1"));
        let stored: UserInfo =
            serde_json::from_str(&storage.get(keys::USER).unwrap()).unwrap();
        assert_eq!(stored, sample_user());
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_session_alone() {
        let backend = FakeBackend::with_documents(vec![]);
        let storage = MemoryStore::new();
        let session = SessionStore::restore(storage.clone());

        let err = login(&backend, &session, &credentials("nope"))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::InvalidCredentials);
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        let backend = FakeBackend::with_documents(vec![]);
        let form = RegisterRequest {
            username: "A".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
        };

        register(&backend, &form).await.unwrap();
        assert_eq!(register(&backend, &form).await, Err(ApiError::Conflict));
        assert_eq!(backend.calls(), ["register a@b.com", "register a@b.com"]);
    }
}

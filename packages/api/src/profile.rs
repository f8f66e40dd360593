use store::KeyValueStore;
use tracing::info;

use crate::backend::UserBackend;
use crate::error::ApiError;
use crate::models::{ProfilePatch, UserInfo};
use crate::session::{Navigate, SessionStore};

/// Change the signed-in user's name and email.
///
/// After the backend accepts the change the session identity is updated
/// locally; the server copy is not read back.
pub async fn update_profile<B, S, N>(
    backend: &B,
    session: &SessionStore<S>,
    navigator: &N,
    patch: &ProfilePatch,
) -> Result<UserInfo, ApiError>
where
    B: UserBackend,
    S: KeyValueStore,
    N: Navigate,
{
    let token = session.credential().ok_or(ApiError::NotAuthenticated)?;
    let id = session.user().ok_or(ApiError::NotAuthenticated)?.id;

    let result = backend.update_profile(&token, &id, patch).await;
    session.intercept(result, &token, navigator)?;

    let user = session
        .update_user(|user| {
            user.username = patch.username.clone();
            user.email = patch.email.clone();
        })
        .ok_or(ApiError::NotAuthenticated)?;
    info!(user_id = %user.id, "profile updated");
    Ok(user)
}

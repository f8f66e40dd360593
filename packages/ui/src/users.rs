//! Admin user directory hook.

use api::{ApiClient, UserDirectory, UsersState};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::gate::{use_login_redirect, LoginRedirect};
use crate::platform::PlatformStore;

pub type AppUsers = UserDirectory<ApiClient, PlatformStore, LoginRedirect>;

#[derive(Clone)]
pub struct Users {
    pub directory: AppUsers,
    pub state: Signal<UsersState>,
}

/// Like [`use_documents`](crate::use_documents), but only lists users when
/// the signed-in identity is an admin.
pub fn use_users() -> Users {
    let session = use_session();
    let redirect = use_login_redirect();
    let directory = use_hook(|| {
        UserDirectory::new(session.client.clone(), session.store.clone(), redirect)
    });
    let state = use_signal(|| directory.state());

    use_hook({
        let directory = directory.clone();
        move || {
            directory.subscribe(move |snapshot| {
                let mut state = state;
                state.set(snapshot.clone());
            })
        }
    });

    let is_admin = session
        .state
        .read()
        .user
        .as_ref()
        .is_some_and(|u| u.is_admin());
    use_future({
        let directory = directory.clone();
        move || {
            let directory = directory.clone();
            async move {
                if is_admin {
                    let _ = directory.fetch_all().await;
                }
            }
        }
    });

    Users { directory, state }
}

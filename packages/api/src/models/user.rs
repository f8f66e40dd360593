//! # User models
//!
//! [`UserInfo`] is the signed-in identity the backend returns at login and the
//! shape of every row in the admin user list. It is persisted as JSON under the
//! `user` storage key, so its serde representation must stay stable.
//!
//! The request bodies ([`LoginRequest`], [`RegisterRequest`], [`NewUser`],
//! [`RolePatch`], [`ProfilePatch`]) match the backend's JSON field names.

use serde::{Deserialize, Serialize};

/// Account role. The backend only issues `admin` and `empleado`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Empleado,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Empleado => "empleado",
        }
    }
}

/// User information safe to keep on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Successful `POST /auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /users`, used by admins to create accounts directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `PATCH /users/:id` when an admin changes a role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RolePatch {
    pub role: Role,
}

/// Body of `PATCH /users/:id` when users edit their own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilePatch {
    pub username: String,
    pub email: String,
}

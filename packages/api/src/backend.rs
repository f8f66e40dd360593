//! # Backend seams
//!
//! The sync layer talks to the REST API through these traits rather than to
//! [`ApiClient`](crate::ApiClient) directly, so the same logic runs against
//! the real backend in the app and against in-process fakes in tests.
//!
//! Every protected method takes the bearer token explicitly. Implementations
//! must map HTTP 401 to [`ApiError::Unauthorized`]; deciding what a 401 means
//! for the session is the caller's job.

use std::future::Future;

use serde_json::Value;

use crate::error::ApiError;
use crate::models::{
    Analysis, AuthResponse, ChatRequest, Document, DriveImport, LoginRequest, NewUser,
    ProfilePatch, RegisterRequest, Role, UpdateDocument, Upload, UserInfo,
};

/// Public authentication endpoints.
pub trait AuthBackend {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = Result<(), ApiError>>;
}

/// `/documents` endpoints.
pub trait DocumentBackend {
    fn list_documents(&self, token: &str) -> impl Future<Output = Result<Vec<Document>, ApiError>>;
    fn get_document(
        &self,
        token: &str,
        id: &str,
    ) -> impl Future<Output = Result<Document, ApiError>>;
    fn update_document(
        &self,
        token: &str,
        id: &str,
        patch: &UpdateDocument,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn delete_document(&self, token: &str, id: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn upload_document(
        &self,
        token: &str,
        upload: &Upload,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn import_from_drive(
        &self,
        token: &str,
        import: &DriveImport,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn analyze_document(
        &self,
        token: &str,
        document: &Document,
    ) -> impl Future<Output = Result<Analysis, ApiError>>;
}

/// `/users` endpoints.
pub trait UserBackend {
    fn list_users(&self, token: &str) -> impl Future<Output = Result<Vec<UserInfo>, ApiError>>;
    fn create_user(&self, token: &str, user: &NewUser)
        -> impl Future<Output = Result<(), ApiError>>;
    fn update_role(
        &self,
        token: &str,
        id: &str,
        role: Role,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn update_profile(
        &self,
        token: &str,
        id: &str,
        patch: &ProfilePatch,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn delete_user(&self, token: &str, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

/// `/chat` endpoint. Returns the raw body; see [`crate::models::extract_answer`].
pub trait ChatBackend {
    fn ask(
        &self,
        token: &str,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<Value, ApiError>>;
}

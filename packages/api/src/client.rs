//! REST client for the DocMind backend.
//!
//! Uses reqwest, which compiles to `fetch` in the browser. Multipart uploads
//! never set a content type by hand so the transport can add the boundary.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::{AuthBackend, ChatBackend, DocumentBackend, UserBackend};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Analysis, AnalyzeRequest, AuthResponse, ChatRequest, Document, DriveImport, LoginRequest,
    NewUser, ProfilePatch, RegisterRequest, Role, RolePatch, UpdateDocument, Upload, UserInfo,
};

/// HTTP client for the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Client for the backend named by the environment.
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into an [`ApiError`].
    ///
    /// 401 always becomes [`ApiError::Unauthorized`]. Other failures carry the
    /// body's `message` field when there is one, else `context`.
    async fn check(resp: Response, context: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "{context}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body, context),
            });
        }
        Ok(resp)
    }
}

fn error_message(body: &str, context: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| context.to_string())
}

impl AuthBackend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        debug!(email = %request.email, "POST /auth/login");
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::InvalidCredentials);
        }
        let resp = Self::check(resp, "Could not sign in").await?;
        Ok(resp.json().await?)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        debug!(email = %request.email, "POST /auth/register");
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        if resp.status() == StatusCode::CONFLICT {
            return Err(ApiError::Conflict);
        }
        Self::check(resp, "Could not create the account").await?;
        Ok(())
    }
}

impl DocumentBackend for ApiClient {
    async fn list_documents(&self, token: &str) -> Result<Vec<Document>, ApiError> {
        let resp = self
            .http
            .get(self.url("/documents"))
            .bearer_auth(token)
            .send()
            .await?;
        let resp = Self::check(resp, "Error fetching documents").await?;
        Ok(resp.json().await?)
    }

    async fn get_document(&self, token: &str, id: &str) -> Result<Document, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/documents/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        let resp = Self::check(resp, "Error loading document").await?;
        Ok(resp.json().await?)
    }

    async fn update_document(
        &self,
        token: &str,
        id: &str,
        patch: &UpdateDocument,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/documents/{id}")))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        Self::check(resp, "Error updating document").await?;
        Ok(())
    }

    async fn delete_document(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/documents/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(resp, "Error deleting document").await?;
        Ok(())
    }

    async fn upload_document(&self, token: &str, upload: &Upload) -> Result<(), ApiError> {
        let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.filename.clone());
        if let Some(mime) = &upload.mime {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("file", part);

        debug!(filename = %upload.filename, size = upload.bytes.len(), "POST /documents/upload");
        let resp = self
            .http
            .post(self.url("/documents/upload"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::check(resp, "Error uploading file").await?;
        Ok(())
    }

    async fn import_from_drive(&self, token: &str, import: &DriveImport) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/documents/upload-drive"))
            .bearer_auth(token)
            .json(import)
            .send()
            .await?;
        Self::check(resp, "Error importing from Drive").await?;
        Ok(())
    }

    async fn analyze_document(&self, token: &str, document: &Document) -> Result<Analysis, ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/documents/{}/analyze", document.id)))
            .bearer_auth(token)
            .json(&AnalyzeRequest::from(document))
            .send()
            .await?;
        let resp = Self::check(resp, "Error analyzing document").await?;
        Ok(resp.json().await?)
    }
}

impl UserBackend for ApiClient {
    async fn list_users(&self, token: &str) -> Result<Vec<UserInfo>, ApiError> {
        let resp = self
            .http
            .get(self.url("/users"))
            .bearer_auth(token)
            .send()
            .await?;
        let resp = Self::check(resp, "Error loading users").await?;
        Ok(resp.json().await?)
    }

    async fn create_user(&self, token: &str, user: &NewUser) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/users"))
            .bearer_auth(token)
            .json(user)
            .send()
            .await?;
        Self::check(resp, "Error creating user").await?;
        Ok(())
    }

    async fn update_role(&self, token: &str, id: &str, role: Role) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/users/{id}")))
            .bearer_auth(token)
            .json(&RolePatch { role })
            .send()
            .await?;
        Self::check(resp, "Error updating role").await?;
        Ok(())
    }

    async fn update_profile(
        &self,
        token: &str,
        id: &str,
        patch: &ProfilePatch,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/users/{id}")))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        Self::check(resp, "Error updating profile").await?;
        Ok(())
    }

    async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/users/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(resp, "Error deleting user").await?;
        Ok(())
    }
}

impl ChatBackend for ApiClient {
    async fn ask(&self, token: &str, request: &ChatRequest) -> Result<Value, ApiError> {
        let resp = self
            .http
            .post(self.url("/chat"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        let resp = Self::check(resp, "Could not process the question").await?;
        Ok(resp.json().await?)
    }
}

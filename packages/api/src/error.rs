use thiserror::Error;

/// Failure of a backend call, as the UI needs to tell them apart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend rejected the credential (HTTP 401 on a protected call).
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Wrong email or password at login (HTTP 401 on `/auth/login`).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A protected call was attempted with no credential in the session.
    #[error("not signed in")]
    NotAuthenticated,

    /// Registration clash (HTTP 409).
    #[error("user or email already exists")]
    Conflict,

    #[error("{message} ({status})")]
    Status { status: u16, message: String },

    #[error("could not reach the server: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for the failure that must end the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

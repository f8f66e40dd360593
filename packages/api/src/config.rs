//! Backend location.
//!
//! Native builds read `DOCMIND_API_URL` from the environment (after loading a
//! `.env` file if present). Browser builds have no environment at runtime, so
//! the same variable is baked in at compile time.

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "DOCMIND_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(API_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::new(option_env!("DOCMIND_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ApiConfig::new("https://api.example.com//");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:3000");
    }
}

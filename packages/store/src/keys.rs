//! Well-known durable storage keys.
//!
//! The session keys are owned by the session store in the `api` crate; the
//! preference keys by [`crate::Preferences`]. Nothing else should touch them.

/// Raw bearer token string.
pub const ACCESS_TOKEN: &str = "access_token";
/// JSON-serialized signed-in identity.
pub const USER: &str = "user";
/// `"true"` or `"false"`.
pub const DARK_MODE: &str = "darkMode";
/// Language code, `"es"` or `"en"`.
pub const LANGUAGE: &str = "language";

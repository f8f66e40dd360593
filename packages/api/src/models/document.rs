//! # Document models
//!
//! [`Document`] is the backend's record for an uploaded file. The client only
//! ever holds a read-mostly copy; see [`crate::sync::DocumentSync`] for how the
//! cached list is kept in step with the server.
//!
//! `created_at` is kept as the string the backend sent. Ordering goes through
//! [`Document::created_at_key`], which understands RFC 3339 timestamps, naive
//! `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps and bare `YYYY-MM-DD` dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A document stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub s3_url: String,
    pub user_id: String,
    pub created_at: String,
}

impl Document {
    /// Parsed creation time, or `None` when the backend sent something unparseable.
    pub fn created_at_key(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Sort most recent first. Unparseable timestamps go last; ties keep server order.
pub fn sort_newest_first(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.created_at_key().cmp(&a.created_at_key()));
}

/// Body of `PATCH /documents/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl UpdateDocument {
    pub fn rename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }
}

/// A local file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// MIME type of the file itself (not of the request body).
    pub mime: Option<String>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
            mime: None,
        }
    }
}

/// Body of `POST /documents/upload-drive`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveImport {
    pub file_id: String,
    /// Google OAuth token for the picked file, not the session credential.
    pub access_token: String,
}

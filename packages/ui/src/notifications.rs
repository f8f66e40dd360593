//! Transient notifications for finished actions.
//!
//! Views report what happened through [`notify`] or [`notify_result`]. The
//! newest few undismissed notices show as toasts; everything stays in the
//! history drawer until cleared.

use api::ApiError;
use dioxus::prelude::*;

/// Toasts shown at once. Older undismissed notices wait in the history.
pub const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    pub fn css(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub tone: Tone,
    pub message: String,
    /// HTTP status for backend failures.
    pub status: Option<u16>,
    /// Local `HH:MM:SS`.
    pub at: String,
    pub dismissed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    notices: Vec<Notice>,
    next_id: u64,
    pub history_open: bool,
}

impl Notifications {
    pub fn push(&mut self, tone: Tone, message: impl Into<String>) -> u64 {
        self.insert(tone, message.into(), None)
    }

    /// Record a backend failure, keeping its status code when there is one.
    pub fn push_error(&mut self, err: &ApiError) -> u64 {
        let status = match err {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        };
        self.insert(Tone::Error, err.to_string(), status)
    }

    fn insert(&mut self, tone: Tone, message: String, status: Option<u16>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            tone,
            message,
            status,
            at: chrono::Local::now().format("%H:%M:%S").to_string(),
            dismissed: false,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            notice.dismissed = true;
        }
    }

    pub fn dismiss_all(&mut self) {
        self.notices.iter_mut().for_each(|n| n.dismissed = true);
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    /// Undismissed notices, newest first, at most [`TOAST_LIMIT`].
    pub fn toasts(&self) -> Vec<Notice> {
        self.notices
            .iter()
            .rev()
            .filter(|n| !n.dismissed)
            .take(TOAST_LIMIT)
            .cloned()
            .collect()
    }

    /// Every notice, newest first.
    pub fn history(&self) -> Vec<Notice> {
        self.notices.iter().rev().cloned().collect()
    }

    pub fn unseen_errors(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| n.tone == Tone::Error && !n.dismissed)
            .count()
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notifications: &mut Signal<Notifications>, tone: Tone, message: &str) {
    notifications.write().push(tone, message);
}

/// Report the outcome of a backend call.
///
/// A 401 is not reported: the session is already gone and the user is on
/// their way to the login page.
pub fn notify_result<T>(
    notifications: &mut Signal<Notifications>,
    result: &Result<T, ApiError>,
    success: &str,
) {
    match result {
        Ok(_) => notify(notifications, Tone::Success, success),
        Err(ApiError::Unauthorized) => {}
        Err(err) => {
            notifications.write().push_error(err);
        }
    }
}

//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach this type; they are reported by the page
//! that owns the form. Everything here is scoped to one request and is shown
//! inline on the page that issued it. Nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Failure of a single REST round-trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// The backend's `error` field, when it sent one.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR or native builds).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        Self::Rejected { status, message }
    }

    /// Message to show the user: the backend's own message for rejections,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

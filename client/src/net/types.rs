//! Wire types for the blog REST API.
//!
//! DESIGN
//! ======
//! These mirror the backend's JSON payloads. The client holds read-only
//! copies of posts fetched per view; nothing here is cached.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A blog post as returned by `/posts` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Backend-assigned post identifier.
    pub id: i64,
    pub title: String,
    /// Markdown source.
    pub content: String,
    /// Username of the post's author.
    pub author: String,
    /// Creation timestamp as formatted by the backend.
    pub created_at: String,
    /// Last-modified timestamp, when the backend reports one.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Username/password pair sent to `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub username: String,
    pub token: String,
}

/// Title/content body for creating or updating a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

/// Error body returned alongside non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

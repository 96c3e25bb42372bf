//! REST client for the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: stubs returning
//! `ApiError::Unavailable`, since these calls are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! Request construction is separated from execution. Each endpoint has a pure
//! builder producing an `ApiRequest` (method, URL, bearer token, JSON body)
//! and one shared executor sends it, so the wire contract can be checked
//! without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, Credentials, Post, PostDraft};

/// API base used when `BLOG_API_BASE` is not set at compile time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Base path of the REST API, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("BLOG_API_BASE").map_or(DEFAULT_API_BASE, |base| base.trim_end_matches('/'))
}

/// Which auth endpoint a credential submission targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Endpoint path relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
        }
    }

    /// The other mode, for the login/register switch.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described REST call, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: HttpMethod, url: String) -> Self {
        Self { method, url, bearer: None, body: None }
    }

    fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_owned);
        self
    }

    fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of the `Authorization` header, if the request is authenticated.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(bearer_header)
    }
}

/// `Authorization` header value for a bearer token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn posts_endpoint(base: &str) -> String {
    format!("{base}/posts")
}

fn post_endpoint(base: &str, post_id: i64) -> String {
    format!("{base}/posts/{post_id}")
}

/// `POST /auth/login` or `POST /auth/register`.
pub fn auth_request(base: &str, mode: AuthMode, creds: &Credentials) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, format!("{base}{}", mode.path())).with_body(serde_json::json!({
        "username": creds.username,
        "password": creds.password,
    }))
}

/// `GET /posts`, unauthenticated.
pub fn list_posts_request(base: &str) -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, posts_endpoint(base))
}

/// `POST /posts` when `post_id` is `None`, otherwise `PUT /posts/{id}`.
pub fn save_post_request(base: &str, post_id: Option<i64>, draft: &PostDraft, token: Option<&str>) -> ApiRequest {
    let (method, url) = match post_id {
        Some(id) => (HttpMethod::Put, post_endpoint(base, id)),
        None => (HttpMethod::Post, posts_endpoint(base)),
    };
    ApiRequest::new(method, url)
        .with_bearer(token)
        .with_body(serde_json::json!({
            "title": draft.title,
            "content": draft.content,
        }))
}

/// `DELETE /posts/{id}`.
pub fn delete_post_request(base: &str, post_id: i64, token: Option<&str>) -> ApiRequest {
    ApiRequest::new(HttpMethod::Delete, post_endpoint(base, post_id)).with_bearer(token)
}

#[cfg(feature = "hydrate")]
async fn send(request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let builder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
        HttpMethod::Put => Request::put(&request.url),
        HttpMethod::Delete => Request::delete(&request.url),
    };
    let builder = match request.authorization() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    };
    let prepared = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a session token.
///
/// # Errors
///
/// Returns `ApiError::Rejected` carrying the backend's message when the
/// credentials are refused, or a transport/decode error.
pub async fn login_or_register(mode: AuthMode, creds: &Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&auth_request(api_base(), mode, creds)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mode, creds);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every post, newest first as ordered by the backend.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a post list.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&list_posts_request(api_base())).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create (`post_id == None`) or update a post and return the saved copy.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the backend refuses the write (missing
/// token, not the author, validation), or a transport/decode error.
pub async fn save_post(post_id: Option<i64>, draft: &PostDraft, token: Option<&str>) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&save_post_request(api_base(), post_id, draft, token)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, draft, token);
        Err(ApiError::Unavailable)
    }
}

/// Delete a post.
///
/// Completion of the request is success; a non-2xx status is only logged.
///
/// # Errors
///
/// Returns `ApiError::Transport` when no response was received.
pub async fn delete_post(post_id: i64, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&delete_post_request(api_base(), post_id, token)).await?;
        if !resp.ok() {
            leptos::logging::warn!("delete of post {post_id} returned status {}", resp.status());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, token);
        Err(ApiError::Unavailable)
    }
}

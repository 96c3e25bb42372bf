//! `/api/*` forwarding to the blog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client talks to a same-origin `/api` base. This handler relays
//! each call to the configured upstream unchanged: method, path, query,
//! bearer token and JSON body out; status, content type and body back. No
//! request is retried, cached or inspected beyond that.
//!
//! ERROR HANDLING
//! ==============
//! When the upstream cannot be reached the client gets `502` with the same
//! `{ "error": ... }` shape the backend uses, so its error display applies.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{OriginalUri, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Upstream URL for a request to `/api/{path}?{query}`.
pub(crate) fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{upstream}/api/{path}?{q}"),
        None => format!("{upstream}/api/{path}"),
    }
}

/// Path after `/api/`, still percent-encoded as the client sent it.
pub(crate) fn encoded_api_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix("/api/").unwrap_or_else(|| path.trim_start_matches('/'))
}

fn forwarded_request_headers() -> [HeaderName; 3] {
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]
}

fn bad_gateway(message: &str) -> Response {
    (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": message }))).into_response()
}

/// `ANY /api/{*path}` — relay to the upstream backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, encoded_api_path(&uri), query.as_deref());

    let mut request = state.http.request(method.clone(), url.as_str());
    for name in forwarded_request_headers() {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream_resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream request failed");
            return bad_gateway("Blog backend is unavailable");
        }
    };

    let status = upstream_resp.status();
    let content_type = upstream_resp.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream_resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream response body failed");
            return bad_gateway("Blog backend response was interrupted");
        }
    };
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied api request");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}

//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends REST calls, `error` classifies their failures, and
//! `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;

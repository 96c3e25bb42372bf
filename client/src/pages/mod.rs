//! Page modules, one per router page.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and its single REST call per user action,
//! then reports the outcome to the root through callbacks. Shared rendering
//! pieces live in `components`.

pub mod auth;
pub mod post_editor;
pub mod post_list;
pub mod post_view;

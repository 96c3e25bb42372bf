//! Client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds who is signed in and persists across reloads; `nav`
//! selects the visible page and is rebuilt on every load.

pub mod nav;
pub mod session;

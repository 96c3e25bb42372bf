//! # blog-client
//!
//! Leptos + WASM single-page blogging client.
//!
//! This crate contains the page components, the session store, the in-memory
//! view router, the REST client for the blog backend, and the Markdown and
//! text helpers used while rendering posts. The `server` crate renders the
//! shell through `app::shell` and the browser hydrates it through `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

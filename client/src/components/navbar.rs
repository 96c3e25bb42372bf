//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Always visible above the active page. Reads the session to choose between
//! the signed-in actions and the login link; every action is a callback into
//! the root, which owns the router and the session.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::session::Session;

/// Greeting shown next to the signed-in user's actions.
pub fn greeting(username: &str) -> String {
    format!("Hello, {username}")
}

#[component]
pub fn Navbar(
    on_home: Callback<()>,
    on_login: Callback<()>,
    on_new_post: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let signed_in = move || session.with(Session::is_authenticated);
    let username = move || session.with(|s| s.username().map(str::to_owned));

    view! {
        <nav class="navbar">
            <div class="navbar-brand" on:click=move |_| on_home.run(())>
                "My Blog"
            </div>
            <div class="navbar-links">
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <button class="nav-btn outline" on:click=move |_| on_login.run(())>
                                "Log in / Register"
                            </button>
                        }
                    }
                >
                    <span class="nav-username">{move || greeting(&username().unwrap_or_default())}</span>
                    <button class="nav-btn primary" on:click=move |_| on_new_post.run(())>
                        "+ New Post"
                    </button>
                    <button class="nav-btn danger" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

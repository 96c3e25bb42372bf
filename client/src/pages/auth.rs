//! Login / register page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits credentials to the auth endpoint for the selected mode and hands
//! the issued identity to the root via `on_login`. Failures stay on this page
//! as an inline message; the page never writes the session itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::AuthMode;
use crate::net::types::{AuthResponse, Credentials};

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
const AUTH_FALLBACK: &str = "Something went wrong, please try again";

/// Require a non-blank username and password.
///
/// The username is trimmed; the password is sent as typed.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Log in",
        AuthMode::Register => "Register",
    }
}

fn submit_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Log in",
        AuthMode::Register => "Create account",
    }
}

fn switch_prompt(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("No account yet?", "Register here"),
        AuthMode::Register => ("Already registered?", "Log in here"),
    }
}

#[component]
pub fn AuthPage(on_login: Callback<AuthResponse>) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let creds = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(creds) => creds,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let mode_value = mode.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login_or_register(mode_value, &creds).await {
                Ok(resp) => on_login.run(resp),
                Err(e) => {
                    leptos::logging::warn!("{} failed: {e}", mode_value.path());
                    error.set(Some(e.user_message(AUTH_FALLBACK)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (creds, mode_value, on_login);
    };

    let on_switch = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
    };

    view! {
        <div class="auth-card">
            <h2>{move || heading(mode.get())}</h2>

            <Show when=move || error.get().is_some()>
                <div class="error-msg">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label>"Username"</label>
                    <input
                        type="text"
                        placeholder="Enter a username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="Enter a password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-full">
                    {move || submit_label(mode.get())}
                </button>
            </form>

            <div class="auth-switch">
                {move || switch_prompt(mode.get()).0}
                " "
                <span on:click=on_switch>{move || switch_prompt(mode.get()).1}</span>
            </div>
        </div>
    }
}

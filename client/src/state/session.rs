//! Session store for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `Session` (as an `RwSignal` context). Page
//! components read it to decide author-only affordances; only the auth flow
//! and the logout action write it. Persistence happens through a
//! `KeyValueStore` passed in explicitly, so the session is loaded once at
//! startup and saved on login/logout rather than read from ambient globals.
//!
//! DESIGN
//! ======
//! Username and token travel together in `Identity`, so a half-populated
//! session cannot be represented.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Post;
use crate::util::storage::KeyValueStore;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the username.
pub const USERNAME_KEY: &str = "username";

/// An authenticated user and the bearer token the backend issued for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub token: String,
}

/// Current authentication state; anonymous by default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// Restore a session from `store`.
    ///
    /// Both keys must be present and non-empty; anything less is treated as
    /// anonymous.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let username = store.get(USERNAME_KEY).filter(|u| !u.is_empty());
        let identity = match (username, token) {
            (Some(username), Some(token)) => Some(Identity { username, token }),
            _ => None,
        };
        Self { identity }
    }

    /// Sign in and persist both values.
    pub fn login(&mut self, store: &mut impl KeyValueStore, username: &str, token: &str) {
        store.set(TOKEN_KEY, token);
        store.set(USERNAME_KEY, username);
        self.identity = Some(Identity { username: username.to_owned(), token: token.to_owned() });
    }

    /// Sign out and remove both persisted values.
    pub fn logout(&mut self, store: &mut impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USERNAME_KEY);
        self.identity = None;
    }

    #[cfg(test)]
    pub(crate) fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.username.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether edit/delete affordances should be shown for `post`.
    ///
    /// Rendering decision only; the backend enforces authorship on writes.
    pub fn is_author_of(&self, post: &Post) -> bool {
        self.username().is_some_and(|u| u == post.author)
    }
}

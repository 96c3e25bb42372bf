//! In-memory view router selecting the single visible page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root component as an `RwSignal<NavState>` context. Pages
//! perform their own I/O and then invoke a transition through a callback;
//! the router itself never touches the network and is never persisted.
//!
//! DESIGN
//! ======
//! Fields are private and only the transition methods mutate them, so
//! `Page::Post` is never observable without a post in `current_post`.
//! Renderers read `active()`, which carries the context each page needs.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Post;

/// The fixed set of mutually exclusive pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Auth,
    Post,
    Editor,
}

/// The visible page together with its render context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivePage {
    Home,
    Auth,
    Post(Post),
    /// `None` creates a new post; `Some` edits the given one.
    Editor(Option<Post>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    page: Page,
    current_post: Option<Post>,
    edit_post: Option<Post>,
}

impl NavState {
    #[cfg(test)]
    pub(crate) fn page(&self) -> Page {
        self.page
    }

    #[cfg(test)]
    pub(crate) fn current_post(&self) -> Option<&Post> {
        self.current_post.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn edit_post(&self) -> Option<&Post> {
        self.edit_post.as_ref()
    }

    pub fn active(&self) -> ActivePage {
        match (self.page, &self.current_post) {
            (Page::Home, _) | (Page::Post, None) => ActivePage::Home,
            (Page::Auth, _) => ActivePage::Auth,
            (Page::Post, Some(post)) => ActivePage::Post(post.clone()),
            (Page::Editor, _) => ActivePage::Editor(self.edit_post.clone()),
        }
    }

    /// Brand/home link.
    pub fn go_home(&mut self) {
        self.current_post = None;
        self.page = Page::Home;
    }

    /// Login/register link.
    pub fn go_auth(&mut self) {
        self.page = Page::Auth;
    }

    /// A post was selected from the list.
    pub fn open_post(&mut self, post: Post) {
        self.current_post = Some(post);
        self.page = Page::Post;
    }

    /// New post (`None`) or edit of an existing post.
    pub fn open_editor(&mut self, post: Option<Post>) {
        self.edit_post = post;
        self.page = Page::Editor;
    }

    /// The editor saved successfully; show the saved post.
    pub fn saved(&mut self, post: Post) {
        self.current_post = Some(post);
        self.page = Page::Post;
    }

    /// Leave the editor without saving: back to the viewed post, else home.
    pub fn cancel_edit(&mut self) {
        self.page = if self.current_post.is_some() { Page::Post } else { Page::Home };
    }

    /// The viewed post was deleted.
    pub fn post_deleted(&mut self) {
        self.go_home();
    }

    /// Login or registration succeeded.
    pub fn logged_in(&mut self) {
        self.go_home();
    }

    /// The user logged out.
    pub fn logged_out(&mut self) {
        self.go_home();
    }
}

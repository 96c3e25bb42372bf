//! Root application component, page switch and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::types::{AuthResponse, Post};
use crate::pages::{
    auth::AuthPage, post_editor::PostEditorPage, post_list::PostListPage, post_view::PostViewPage,
};
use crate::state::nav::{ActivePage, NavState};
use crate::state::session::Session;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Successful login or registration: persist the identity, then show home.
pub fn complete_login(session: &mut Session, nav: &mut NavState, store: &mut impl KeyValueStore, resp: &AuthResponse) {
    session.login(store, &resp.username, &resp.token);
    nav.logged_in();
}

/// Logout: forget the identity everywhere, then show home.
pub fn complete_logout(session: &mut Session, nav: &mut NavState, store: &mut impl KeyValueStore) {
    session.logout(store);
    nav.logged_out();
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and router contexts. The blog is a single route;
/// page selection is in-memory `NavState`, not the URL.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let nav = RwSignal::new(NavState::default());
    provide_context(session);
    provide_context(nav);

    // Effects only run in the browser, so SSR output stays anonymous.
    Effect::new(move || {
        let restored = Session::load(&BrowserStorage);
        if let Some(username) = restored.username() {
            leptos::logging::log!("restored session for {username}");
        }
        session.set(restored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/blog.css"/>
        <Title text="My Blog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BlogPage/>
            </Routes>
        </Router>
    }
}

/// Navbar plus the active page, wiring page callbacks to router transitions
/// and session writes.
#[component]
fn BlogPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let active = Memo::new(move |_| nav.with(NavState::active));

    let on_home = Callback::new(move |()| nav.update(NavState::go_home));
    let on_login_link = Callback::new(move |()| nav.update(NavState::go_auth));
    let on_new_post = Callback::new(move |()| nav.update(|n| n.open_editor(None)));
    let on_logout = Callback::new(move |()| {
        session.update(|s| nav.update(|n| complete_logout(s, n, &mut BrowserStorage)));
        leptos::logging::log!("logged out");
    });

    let on_login = Callback::new(move |resp: AuthResponse| {
        session.update(|s| nav.update(|n| complete_login(s, n, &mut BrowserStorage, &resp)));
        leptos::logging::log!("logged in as {}", resp.username);
    });
    let on_open = Callback::new(move |post: Post| nav.update(|n| n.open_post(post)));
    let on_edit = Callback::new(move |post: Post| nav.update(|n| n.open_editor(Some(post))));
    let on_deleted = Callback::new(move |()| nav.update(NavState::post_deleted));
    let on_saved = Callback::new(move |post: Post| nav.update(|n| n.saved(post)));
    let on_cancel = Callback::new(move |()| nav.update(NavState::cancel_edit));

    view! {
        <Navbar on_home=on_home on_login=on_login_link on_new_post=on_new_post on_logout=on_logout/>

        {move || match active.get() {
            ActivePage::Home => view! { <PostListPage on_open=on_open/> }.into_any(),
            ActivePage::Auth => view! { <AuthPage on_login=on_login/> }.into_any(),
            ActivePage::Post(post) => {
                view! { <PostViewPage post=post on_back=on_home on_edit=on_edit on_deleted=on_deleted/> }
                    .into_any()
            }
            ActivePage::Editor(post) => {
                view! { <PostEditorPage post=post on_saved=on_saved on_cancel=on_cancel/> }.into_any()
            }
        }}
    }
}

use super::*;

fn post(id: i64) -> Post {
    Post {
        id,
        title: format!("post {id}"),
        content: "body".to_owned(),
        author: "alice".to_owned(),
        created_at: "2026-01-01 00:00:00".to_owned(),
        updated_at: None,
    }
}

fn assert_post_has_context(nav: &NavState) {
    if nav.page() == Page::Post {
        assert!(nav.current_post().is_some(), "post page without a post: {nav:?}");
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_at_home_without_context() {
    let nav = NavState::default();
    assert_eq!(nav.page(), Page::Home);
    assert_eq!(nav.active(), ActivePage::Home);
    assert!(nav.current_post().is_none());
    assert!(nav.edit_post().is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn home_to_auth() {
    let mut nav = NavState::default();
    nav.go_auth();
    assert_eq!(nav.active(), ActivePage::Auth);
}

#[test]
fn login_success_returns_home() {
    let mut nav = NavState::default();
    nav.go_auth();
    nav.logged_in();
    assert_eq!(nav.active(), ActivePage::Home);
}

#[test]
fn open_post_carries_post_context() {
    let mut nav = NavState::default();
    nav.open_post(post(5));
    assert_eq!(nav.page(), Page::Post);
    assert_eq!(nav.active(), ActivePage::Post(post(5)));
}

#[test]
fn new_post_editor_has_no_context() {
    let mut nav = NavState::default();
    nav.open_editor(None);
    assert_eq!(nav.active(), ActivePage::Editor(None));
}

#[test]
fn edit_from_post_view_carries_post() {
    let mut nav = NavState::default();
    nav.open_post(post(3));
    nav.open_editor(Some(post(3)));
    assert_eq!(nav.active(), ActivePage::Editor(Some(post(3))));
}

#[test]
fn save_shows_saved_post() {
    let mut nav = NavState::default();
    nav.open_editor(None);
    nav.saved(post(9));
    assert_eq!(nav.active(), ActivePage::Post(post(9)));
}

#[test]
fn save_after_edit_replaces_viewed_post() {
    let mut nav = NavState::default();
    nav.open_post(post(3));
    nav.open_editor(Some(post(3)));
    let mut updated = post(3);
    updated.title = "renamed".to_owned();
    nav.saved(updated.clone());
    assert_eq!(nav.active(), ActivePage::Post(updated));
}

#[test]
fn cancel_returns_to_viewed_post() {
    let mut nav = NavState::default();
    nav.open_post(post(4));
    nav.open_editor(Some(post(4)));
    nav.cancel_edit();
    assert_eq!(nav.active(), ActivePage::Post(post(4)));
}

#[test]
fn cancel_without_viewed_post_returns_home() {
    let mut nav = NavState::default();
    nav.open_editor(None);
    nav.cancel_edit();
    assert_eq!(nav.active(), ActivePage::Home);
}

#[test]
fn cancel_after_visiting_home_does_not_resurrect_old_post() {
    let mut nav = NavState::default();
    nav.open_post(post(4));
    nav.go_home();
    nav.open_editor(None);
    nav.cancel_edit();
    assert_eq!(nav.active(), ActivePage::Home);
}

#[test]
fn delete_returns_home_and_forgets_post() {
    let mut nav = NavState::default();
    nav.open_post(post(5));
    nav.post_deleted();
    assert_eq!(nav.active(), ActivePage::Home);
    assert!(nav.current_post().is_none());

    nav.open_editor(None);
    nav.cancel_edit();
    assert_eq!(nav.active(), ActivePage::Home);
}

#[test]
fn logout_returns_home() {
    let mut nav = NavState::default();
    nav.open_post(post(1));
    nav.logged_out();
    assert_eq!(nav.active(), ActivePage::Home);
}

#[test]
fn home_reachable_from_editor() {
    let mut nav = NavState::default();
    nav.open_editor(None);
    nav.go_home();
    assert_eq!(nav.page(), Page::Home);
}

// =============================================================
// Invariant: a post page always has a post
// =============================================================

#[test]
fn post_page_always_has_context_across_transition_sequences() {
    type Step = fn(&mut NavState);
    let steps: [Step; 9] = [
        NavState::go_home,
        NavState::go_auth,
        |n| n.open_post(post(1)),
        |n| n.open_editor(None),
        |n| n.open_editor(Some(post(2))),
        |n| n.saved(post(3)),
        NavState::cancel_edit,
        NavState::post_deleted,
        NavState::logged_in,
    ];

    for first in steps {
        for second in steps {
            for third in steps {
                let mut nav = NavState::default();
                for step in [first, second, third] {
                    step(&mut nav);
                    assert_post_has_context(&nav);
                    if let ActivePage::Post(p) = nav.active() {
                        assert_eq!(Some(&p), nav.current_post());
                    }
                }
            }
        }
    }
}

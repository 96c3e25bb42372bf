//! Home page listing every post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full post list once per activation (no pagination, no cache)
//! and hands the selected post, already in hand, to `on_open`.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::types::Post;
use crate::util::text::post_count_label;

#[cfg(feature = "hydrate")]
const LIST_FALLBACK: &str = "Could not load posts";

#[component]
pub fn PostListPage(on_open: Callback<Post>) -> impl IntoView {
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_posts().await {
            Ok(items) => posts.set(items),
            Err(e) => {
                leptos::logging::warn!("post list fetch failed: {e}");
                error.set(Some(e.user_message(LIST_FALLBACK)));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="page">
            <div class="posts-header">
                <h1>"The Blog"</h1>
                <Show when=move || posts.with(|p| !p.is_empty())>
                    <span class="posts-header__count">{move || post_count_label(posts.with(Vec::len))}</span>
                </Show>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Loading posts..."</p> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <div class="error-msg">{message}</div> }.into_any();
                }
                let items = posts.get();
                if items.is_empty() {
                    return view! {
                        <div class="empty">
                            <p>"No posts yet. Log in and write the first one!"</p>
                        </div>
                    }
                        .into_any();
                }
                items
                    .into_iter()
                    .map(|post| view! { <PostCard post=post on_open=on_open/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

//! Clickable summary card for a post in the home list.

use leptos::prelude::*;

use crate::components::post_meta::PostMeta;
use crate::net::types::Post;
use crate::util::text::preview_text;

/// Card showing title, truncated preview, author and date.
///
/// Clicking hands the whole post to `on_open`; the post page renders it
/// without a second fetch.
#[component]
pub fn PostCard(post: Post, on_open: Callback<Post>) -> impl IntoView {
    let preview = preview_text(&post.content);
    let title = post.title.clone();
    let author = post.author.clone();
    let created_at = post.created_at.clone();

    view! {
        <div class="post-card" on:click=move |_| on_open.run(post.clone())>
            <h2>{title}</h2>
            <div class="post-preview">{preview}</div>
            <PostMeta author=author created_at=created_at/>
        </div>
    }
}

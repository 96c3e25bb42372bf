//! Author and date line shared by post cards and the post page.

use leptos::prelude::*;

use crate::util::text::display_date;

#[component]
pub fn PostMeta(author: String, created_at: String) -> impl IntoView {
    let date = display_date(&created_at).to_owned();

    view! {
        <div class="post-meta">
            <span class="post-meta__author">{author}</span>
            <span class="post-meta__date">{date}</span>
        </div>
    }
}

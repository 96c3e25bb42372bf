//! Single post page with rendered Markdown and author-only actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the post object handed over by the router (no refetch). Edit and
//! delete are offered only when the session user is the author; the backend
//! remains the authority on who may write.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::post_meta::PostMeta;
use crate::net::types::Post;
use crate::state::session::Session;
use crate::util::markdown::render_markdown_html;

#[cfg(feature = "hydrate")]
const DELETE_FALLBACK: &str = "Could not delete the post";

#[component]
pub fn PostViewPage(
    post: Post,
    on_back: Callback<()>,
    on_edit: Callback<Post>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let confirming = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let post_id = post.id;
    let body_html = render_markdown_html(&post.content);
    let is_author = {
        let post = post.clone();
        move || session.with(|s| s.is_author_of(&post))
    };

    let on_edit_click = Callback::new({
        let post = post.clone();
        move |()| on_edit.run(post.clone())
    });

    let on_delete_confirm = Callback::new(move |()| {
        confirming.set(false);
        error.set(None);
        let token = session.with_untracked(|s| s.token().map(str::to_owned));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_post(post_id, token.as_deref()).await {
                Ok(()) => on_deleted.run(()),
                Err(e) => {
                    leptos::logging::warn!("delete of post {post_id} failed: {e}");
                    error.set(Some(e.user_message(DELETE_FALLBACK)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, post_id, on_deleted);
    });
    let on_delete_cancel = Callback::new(move |()| confirming.set(false));

    view! {
        <div class="page">
            <div class="post-full">
                <div class="post-actions">
                    <button class="btn-back" on:click=move |_| on_back.run(())>
                        "← Back"
                    </button>
                    <Show when=is_author>
                        <button class="btn-edit" on:click=move |_| on_edit_click.run(())>
                            "Edit"
                        </button>
                        <button class="btn-del" on:click=move |_| confirming.set(true)>
                            "Delete"
                        </button>
                    </Show>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="error-msg">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <h1>{post.title}</h1>
                <PostMeta author=post.author created_at=post.created_at/>

                <div class="markdown-body" inner_html=body_html></div>
            </div>

            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="Delete post"
                    message="Are you sure you want to delete this post?"
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

//! Create / edit form for a post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Create mode when no post is passed in, edit mode otherwise. Validation
//! happens before any request is issued; the bearer token comes from the
//! session context. The saved post is returned through `on_saved`.

#[cfg(test)]
#[path = "post_editor_test.rs"]
mod post_editor_test;

use leptos::prelude::*;

use crate::net::types::{Post, PostDraft};
use crate::state::session::Session;

pub const FIELDS_REQUIRED: &str = "Title and content are required";
#[cfg(feature = "hydrate")]
const SAVE_FALLBACK: &str = "Could not save the post";

/// Require a title and content that are non-blank after trimming.
///
/// Values are returned as typed; the backend trims on its side.
pub fn validate_post_draft(title: &str, content: &str) -> Result<PostDraft, &'static str> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    Ok(PostDraft { title: title.to_owned(), content: content.to_owned() })
}

fn heading(is_edit: bool) -> &'static str {
    if is_edit { "Edit post" } else { "New post" }
}

fn submit_label(is_edit: bool) -> &'static str {
    if is_edit { "Save changes" } else { "Publish post" }
}

#[component]
pub fn PostEditorPage(post: Option<Post>, on_saved: Callback<Post>, on_cancel: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let post_id = post.as_ref().map(|p| p.id);
    let is_edit = post_id.is_some();
    let (initial_title, initial_content) = post.map(|p| (p.title, p.content)).unwrap_or_default();
    let title = RwSignal::new(initial_title);
    let content = RwSignal::new(initial_content);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let draft = match validate_post_draft(&title.get_untracked(), &content.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let token = session.with_untracked(|s| s.token().map(str::to_owned));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_post(post_id, &draft, token.as_deref()).await {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    leptos::logging::warn!("saving post failed: {e}");
                    error.set(Some(e.user_message(SAVE_FALLBACK)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, token, on_saved);
    };

    view! {
        <div class="page">
            <div class="editor-card">
                <h2>{heading(is_edit)}</h2>

                <Show when=move || error.get().is_some()>
                    <div class="error-msg">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Title"</label>
                        <input
                            type="text"
                            placeholder="Post title..."
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Content (Markdown supported: **bold**, # heading, ...)"</label>
                        <textarea
                            placeholder="Write your post here..."
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="editor-actions">
                        <button type="submit" class="btn-full">
                            {submit_label(is_edit)}
                        </button>
                        <button type="button" class="btn-back" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

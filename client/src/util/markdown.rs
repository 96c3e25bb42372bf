//! Markdown-to-HTML rendering for post bodies.
//!
//! TRADE-OFFS
//! ==========
//! Raw HTML embedded in a post is dropped rather than passed through, and
//! link and image destinations are limited to relative URLs and the
//! `http`, `https` and `mailto` schemes. The output can therefore be
//! inserted with `inner_html` without trusting post authors. Markdown that
//! relies on inline HTML renders without it.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render Markdown source to an HTML fragment.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_destination(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_destination(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Keep `dest` when it is relative or uses an allowed scheme, else `#`.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) { dest } else { CowStr::Borrowed("#") }
}

/// Whether a link or image destination may be emitted as-is.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme,
/// so they are stripped before the scheme is compared.
pub fn is_safe_destination(dest: &str) -> bool {
    let Some(colon) = dest.find(':') else {
        return true;
    };
    let before = &dest[..colon];
    if before.contains(['/', '?', '#']) {
        return true;
    }
    let scheme: String = before
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}

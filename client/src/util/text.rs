//! Display helpers for post cards and headers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Maximum number of characters shown in a post preview before truncation.
pub const PREVIEW_CHARS: usize = 180;

/// Width of the calendar-date prefix of a backend timestamp (`YYYY-MM-DD`).
pub const DATE_CHARS: usize = 10;

const ELLIPSIS: &str = "...";

/// Truncated preview of a post body.
///
/// Content of at most [`PREVIEW_CHARS`] characters is returned unchanged;
/// longer content is cut to that many characters and suffixed with `...`.
pub fn preview_text(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_owned(),
    }
}

/// Calendar-date portion of a timestamp such as `2026-03-01 12:30:00`.
pub fn display_date(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(DATE_CHARS) {
        Some((cut, _)) => &timestamp[..cut],
        None => timestamp,
    }
}

/// Header label for the number of posts in the list.
pub fn post_count_label(count: usize) -> String {
    if count == 1 { "1 post".to_owned() } else { format!("{count} posts") }
}

//! Plain-text rendering of post lists and pagination controls.

use chrono::{DateTime, Utc};

use crate::state::{PageMarker, PageWindow, Post};
use crate::util::{time_ago, truncate_to_width};

/// Column budget for titles in list output.
pub const TITLE_WIDTH: usize = 48;

/// What: Render a pagination bar such as `« 1 … 4 5 [6] 7 8 … 20 »`.
///
/// Inputs:
/// - `window`: Pagination data for the shown page.
///
/// Output:
/// - Bar text, or an empty string when there is at most one page.
///
/// Details:
/// - The current page is bracketed; `«`/`»` appear only when that move is possible.
#[must_use]
pub fn render_page_bar(window: &PageWindow) -> String {
    if window.total_pages <= 1 {
        return String::new();
    }
    let mut parts: Vec<String> = Vec::with_capacity(window.page_numbers.len() + 2);
    if window.has_prev_page {
        parts.push("«".to_string());
    }
    for marker in &window.page_numbers {
        match marker {
            PageMarker::Page(n) if *n == window.current_page => parts.push(format!("[{n}]")),
            other => parts.push(other.to_string()),
        }
    }
    if window.has_next_page {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

/// What: Render one post as a list line.
///
/// Inputs:
/// - `post`: Post summary.
/// - `now`: Reference time for the relative date.
///
/// Output:
/// - `title  (draft)  · 3 days ago` with the title cut to [`TITLE_WIDTH`] columns.
#[must_use]
pub fn render_post_line(post: &Post, now: DateTime<Utc>) -> String {
    let title = truncate_to_width(&post.title, TITLE_WIDTH);
    let draft = if post.published { "" } else { " (draft)" };
    format!("{title}{draft} · {}", time_ago(post.created_at, now))
}

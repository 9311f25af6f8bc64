//! Reading-time estimates and plain-text previews for post bodies.

use scraper::Html;

/// Average reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// What: Extract the visible text of an HTML fragment.
///
/// Inputs:
/// - `html`: Post body as stored by the editor.
///
/// Output:
/// - Text nodes joined by single spaces; tags are dropped.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<Vec<_>>().join(" ")
}

/// What: Estimate reading time for a post body.
///
/// Inputs:
/// - `content`: HTML body.
///
/// Output:
/// - Whole minutes at `WORDS_PER_MINUTE`, rounded up, never below 1.
#[must_use]
pub fn reading_time_minutes(content: &str) -> usize {
    let words = strip_html(content).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Human label for a reading-time estimate.
#[must_use]
pub fn format_reading_time(minutes: usize) -> String {
    format!("{minutes} min read")
}

/// What: Build a short plain-text preview of a post body.
///
/// Inputs:
/// - `content`: HTML body.
/// - `max_chars`: Maximum preview length in characters, before the ellipsis.
///
/// Output:
/// - Whitespace-collapsed text, cut at `max_chars` with a trailing `...` when longer.
#[must_use]
pub fn content_preview(content: &str, max_chars: usize) -> String {
    let text = strip_html(content)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Tags are removed and adjacent blocks stay separate words.
    fn strip_html_separates_blocks() {
        let text = strip_html("<p>Hello</p><p>world <b>again</b></p>");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["Hello", "world", "again"]);
    }

    #[test]
    /// What: Reading time rounds up with a one-minute floor.
    ///
    /// - Input: empty body, 200 words, 201 words
    /// - Output: 1, 1, 2 minutes
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(""), 1);
        let two_hundred = "word ".repeat(200);
        assert_eq!(reading_time_minutes(&two_hundred), 1);
        let more = format!("<p>{two_hundred}</p><p>extra</p>");
        assert_eq!(reading_time_minutes(&more), 2);
        assert_eq!(format_reading_time(1), "1 min read");
        assert_eq!(format_reading_time(7), "7 min read");
    }

    #[test]
    /// What: Previews collapse whitespace and cut long text.
    fn preview_cuts_long_text() {
        assert_eq!(content_preview("<p>short   text</p>", 50), "short text");
        assert_eq!(content_preview("<p>abcdef ghijk</p>", 7), "abcdef...");
        assert_eq!(content_preview("<p>abcdefghij</p>", 4), "abcd...");
    }
}

//! Small helpers for URL encoding, display truncation, and time formatting.

pub mod reading;

use std::fmt::Write;

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

pub use reading::{content_preview, format_reading_time, reading_time_minutes, strip_html};

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - Operates on raw bytes, so non-ASCII input is hex-escaped byte by byte.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Cut text so it fits in a terminal column budget.
///
/// Inputs:
/// - `text`: Text to fit.
/// - `max_width`: Column budget.
///
/// Output:
/// - `text` unchanged when it fits; otherwise a prefix followed by `…`, total width `<= max_width`.
///
/// Details:
/// - Widths come from `unicode-width`, so CJK and emoji count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let full: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if full <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Describe how long ago a timestamp was, coarsely.
///
/// Inputs:
/// - `then`: Past timestamp.
/// - `now`: Reference time.
///
/// Output:
/// - Phrases like `"just now"`, `"1 minute ago"`, `"3 days ago"`, `"2 years ago"`.
///
/// Details:
/// - Timestamps in the future read as `"just now"`.
#[must_use]
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 45 {
        return "just now".to_string();
    }
    let minutes = (secs + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;
    let (n, unit) = if minutes < 45 {
        (minutes.max(1), "minute")
    } else if hours < 24 {
        (hours.max(1), "hour")
    } else if days < 30 {
        (days, "day")
    } else if days < 365 {
        (days / 30, "month")
    } else {
        (days / 365, "year")
    };
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

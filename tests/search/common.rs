//! Shared fixtures for search tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use blogsift::app::SearchSession;
use blogsift::sources::MemorySource;
use blogsift::state::{Post, Visibility};

/// Build a post with the given fields; `day` orders posts newest first.
pub fn post(id: &str, title: &str, excerpt: Option<&str>, day: u32) -> Post {
    Post {
        id: id.into(),
        title: title.into(),
        excerpt: excerpt.map(Into::into),
        content: None,
        featured_image: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, day, 10, 0, 0).unwrap(),
        published: true,
        author_id: None,
    }
}

/// The three-post fixture: two match "hello", one does not.
pub fn greeting_posts() -> Vec<Post> {
    vec![
        post("1", "Hello World", None, 3),
        post("2", "Goodbye", None, 2),
        post("3", "Weekly notes", Some("say hello"), 1),
    ]
}

/// Session over an in-memory source with default debounce.
pub fn session_over(source: MemorySource) -> SearchSession {
    SearchSession::new(Arc::new(source), Visibility::PublishedOnly, None)
}

/// Ids of the current results.
pub fn result_ids(session: &SearchSession) -> Vec<String> {
    session.results().into_iter().map(|p| p.id).collect()
}

//! Case-insensitive substring matching over post summaries.

use crate::state::Post;

/// Whether a query is empty once surrounding whitespace is ignored.
#[must_use]
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// What: Test one post against an already lowercased needle.
///
/// Inputs:
/// - `post`: Candidate post.
/// - `needle`: Lowercased query text.
///
/// Output:
/// - `true` when the title, or the excerpt if present, contains `needle`.
#[must_use]
pub fn matches_query(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post
            .excerpt
            .as_deref()
            .is_some_and(|excerpt| excerpt.to_lowercase().contains(needle))
}

/// What: Filter candidates by a free-text query.
///
/// Inputs:
/// - `candidates`: Posts eligible for matching, in display order.
/// - `query`: Raw query text as typed.
///
/// Output:
/// - Matching posts in their original relative order; empty for a blank query.
///
/// Details:
/// - The query is lowercased but not trimmed, so inner and trailing spaces take part in matching.
#[must_use]
pub fn filter_candidates(candidates: &[Post], query: &str) -> Vec<Post> {
    if is_blank_query(query) {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|post| matches_query(post, &needle))
        .cloned()
        .collect()
}

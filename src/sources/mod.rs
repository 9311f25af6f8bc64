//! Backend data retrieval: the `PostSource` seam and its implementations.

use futures::future::BoxFuture;

use crate::state::{ListFilter, Post};

mod memory;
mod rest;

/// Result type for backend calls.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Post storage backend consumed by the list view and the search session.
///
/// Implementations own their connection details; callers receive them as
/// `Arc<dyn PostSource>` from the composition root.
pub trait PostSource: Send + Sync {
    /// What: List posts newest first.
    ///
    /// Inputs:
    /// - `filter`: Restricts the listing to published posts when set.
    ///
    /// Output:
    /// - Summary records (no `content`), or an error describing the failure.
    fn list_posts(&self, filter: ListFilter) -> BoxFuture<'_, Result<Vec<Post>>>;

    /// What: Fetch one post including its body.
    ///
    /// Inputs:
    /// - `id`: Post identifier.
    ///
    /// Output:
    /// - `Ok(None)` when no post has that id.
    fn fetch_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<Post>>>;
}

pub use memory::MemorySource;
pub use rest::RestSource;

//! In-process post source.

use std::time::Duration;

use futures::future::BoxFuture;

use super::{PostSource, Result};
use crate::state::{ListFilter, Post};

/// Post source backed by a fixed list.
///
/// Applies the same ordering and filter rules as the HTTP backend. Latency
/// and failure can be injected to exercise callers.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    /// Stored posts, any order.
    posts: Vec<Post>,
    /// Delay applied before every answer.
    latency: Duration,
    /// When set, every call fails with this message.
    failure: Option<String>,
}

impl MemorySource {
    /// Create a source serving `posts`.
    #[must_use]
    pub const fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            latency: Duration::ZERO,
            failure: None,
        }
    }

    /// Create a source whose calls always fail with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Delay every answer by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// What: Answer a call after the configured latency.
    ///
    /// Inputs:
    /// - `answer`: Builds the reply from the stored posts.
    ///
    /// Output:
    /// - The injected failure if set; otherwise `answer`'s result.
    async fn respond<T>(&self, answer: impl FnOnce(&[Post]) -> T) -> Result<T> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(msg) = &self.failure {
            return Err(msg.clone().into());
        }
        Ok(answer(self.posts.as_slice()))
    }
}

impl PostSource for MemorySource {
    fn list_posts(&self, filter: ListFilter) -> BoxFuture<'_, Result<Vec<Post>>> {
        Box::pin(self.respond(move |posts| {
            let mut listed: Vec<Post> = posts
                .iter()
                .filter(|p| !filter.published_only || p.published)
                .map(|p| Post {
                    content: None,
                    ..p.clone()
                })
                .collect();
            listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            listed
        }))
    }

    fn fetch_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<Post>>> {
        Box::pin(self.respond(move |posts| posts.iter().find(|p| p.id == id).cloned()))
    }
}

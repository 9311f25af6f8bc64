use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::mpsc;

use blogsift::app::SearchSession;
use blogsift::sources::{MemorySource, PostSource, Result};
use blogsift::state::{ListFilter, Post, Visibility};

use crate::common::{greeting_posts, post, result_ids, session_over};

#[tokio::test(start_paused = true)]
/// What: Queries typed before the load finishes see an empty set, then the loaded set.
///
/// - Input: source answering after 2s; query "hello" typed at once
/// - Output: empty results after the debounce, both matches once the load lands
async fn query_before_load_completes() {
    let source = MemorySource::new(greeting_posts()).with_latency(Duration::from_secs(2));
    let mut s = session_over(source);
    s.set_query("hello");
    s.settle().await;
    assert!(!s.is_loaded());
    assert!(s.results().is_empty());
    assert_eq!(s.recomputations(), 1);

    s.wait_loaded().await;
    assert!(s.is_loaded());
    assert_eq!(result_ids(&s), ["1", "3"]);
}

#[tokio::test(start_paused = true)]
/// What: A failed load is reported once and leaves search empty.
async fn failed_load_reports_and_stays_empty() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut s = SearchSession::new(
        Arc::new(MemorySource::failing("503 Service Unavailable")),
        Visibility::PublishedOnly,
        Some(tx),
    );
    s.wait_loaded().await;
    let msg = rx.try_recv().expect("failure reported");
    assert!(msg.contains("503 Service Unavailable"));
    assert!(rx.try_recv().is_err());
    assert_eq!(s.load_error().as_deref(), Some(msg.as_str()));

    s.set_query("hello");
    s.settle().await;
    assert!(s.results().is_empty());
    assert!(!s.has_results());
    assert!(s.has_query());
}

#[tokio::test(start_paused = true)]
/// What: Drafts only join the candidate set for admin visibility.
async fn drafts_need_admin_visibility() {
    let mut draft = post("9", "Hello draft", None, 5);
    draft.published = false;
    let mut posts = greeting_posts();
    posts.push(draft);

    let mut visitor = session_over(MemorySource::new(posts.clone()));
    visitor.wait_loaded().await;
    visitor.set_query("hello");
    visitor.settle().await;
    assert_eq!(result_ids(&visitor), ["1", "3"]);

    let mut admin = SearchSession::new(Arc::new(MemorySource::new(posts)), Visibility::All, None);
    admin.wait_loaded().await;
    admin.set_query("hello");
    admin.settle().await;
    assert_eq!(result_ids(&admin), ["9", "1", "3"]);
}

#[tokio::test(start_paused = true)]
/// What: A slow admin load that lands after a downgrade does not leak drafts.
///
/// - Input: first load (all posts, 2s) superseded by an instant published-only reload
/// - Output: only the published post remains once the stale load has finished
async fn superseded_load_is_discarded() {
    let mut draft = post("9", "Hello draft", None, 5);
    draft.published = false;
    let source = SlowFirstSource::new(
        vec![post("1", "Hello World", None, 3), draft],
        Duration::from_secs(2),
    );
    let mut s = SearchSession::new(Arc::new(source), Visibility::All, None);
    s.reload(Visibility::PublishedOnly);
    s.wait_loaded().await;
    assert_eq!(s.candidate_count(), 1);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(s.candidate_count(), 1);
    s.set_query("hello");
    s.settle().await;
    assert_eq!(result_ids(&s), ["1"]);
    assert!(s.load_error().is_none());
}

/// Source whose first `list_posts` call is delayed; later calls answer at once.
struct SlowFirstSource {
    /// Answers every call.
    inner: MemorySource,
    /// Delay applied to the first call only.
    first_delay: Duration,
    /// Number of `list_posts` calls so far.
    calls: AtomicUsize,
}

impl SlowFirstSource {
    /// Serve `posts`, delaying the first list call by `first_delay`.
    fn new(posts: Vec<Post>, first_delay: Duration) -> Self {
        Self {
            inner: MemorySource::new(posts),
            first_delay,
            calls: AtomicUsize::new(0),
        }
    }
}

impl PostSource for SlowFirstSource {
    fn list_posts(&self, filter: ListFilter) -> BoxFuture<'_, Result<Vec<Post>>> {
        let first = self.calls.fetch_add(1, Ordering::SeqCst) == 0;
        Box::pin(async move {
            if first {
                tokio::time::sleep(self.first_delay).await;
            }
            self.inner.list_posts(filter).await
        })
    }

    fn fetch_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<Post>>> {
        self.inner.fetch_post(id)
    }
}

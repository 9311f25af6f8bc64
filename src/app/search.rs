//! Debounced client-side post search.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::logic::query::{filter_candidates, is_blank_query};
use crate::sources::PostSource;
use crate::state::{Post, Visibility};

/// Quiet period after the last keystroke before a query is matched.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Mutable state shared between the session handle and its background tasks.
#[derive(Debug, Default)]
struct SessionState {
    /// Query exactly as typed.
    query: String,
    /// Loaded posts that passed the visibility predicate.
    candidates: Vec<Post>,
    /// Last settled matches.
    results: Vec<Post>,
    /// A debounce timer is pending.
    is_searching: bool,
    /// The latest load finished, successfully or not.
    loaded: bool,
    /// Message from the latest failed load.
    load_error: Option<String>,
    /// Bumped on every query change; a timer only applies if it still matches.
    query_generation: u64,
    /// Bumped on every load; stale loads are discarded.
    load_generation: u64,
    /// Number of debounce recomputations that ran.
    recomputations: u64,
}

/// Lock shared state, recovering it if a task panicked while holding the lock.
fn lock(shared: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One search box's worth of state: query, loaded candidates, and settled results.
///
/// Candidates are loaded once in the background when the session is created
/// (and again on [`SearchSession::reload`]). Every [`SearchSession::set_query`]
/// cancels the previous pending timer and schedules a new one, so at most one
/// recomputation is in flight and it always uses the latest query.
///
/// Must be created and driven from inside a Tokio runtime.
pub struct SearchSession {
    /// State shared with the timer and load tasks.
    shared: Arc<Mutex<SessionState>>,
    /// Backend the candidates come from.
    source: Arc<dyn PostSource>,
    /// Where load failures are reported, if anywhere.
    err_tx: Option<mpsc::UnboundedSender<String>>,
    /// Debounce window.
    debounce: Duration,
    /// Visibility applied to loaded candidates.
    visibility: Visibility,
    /// Single-slot debounce timer.
    pending: Option<JoinHandle<()>>,
    /// Most recent candidate load.
    load_task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("debounce", &self.debounce)
            .field("visibility", &self.visibility)
            .field("state", &*lock(&self.shared))
            .finish_non_exhaustive()
    }
}

impl SearchSession {
    /// What: Create a session with the default debounce and start loading candidates.
    ///
    /// Inputs:
    /// - `source`: Backend to list posts from.
    /// - `visibility`: Which posts the caller may see.
    /// - `err_tx`: Optional channel receiving a message if the load fails.
    ///
    /// Output:
    /// - A ready session; the load continues in the background.
    #[must_use]
    pub fn new(
        source: Arc<dyn PostSource>,
        visibility: Visibility,
        err_tx: Option<mpsc::UnboundedSender<String>>,
    ) -> Self {
        Self::with_debounce(source, visibility, err_tx, SEARCH_DEBOUNCE)
    }

    /// Same as [`SearchSession::new`] with a custom debounce window.
    #[must_use]
    pub fn with_debounce(
        source: Arc<dyn PostSource>,
        visibility: Visibility,
        err_tx: Option<mpsc::UnboundedSender<String>>,
        debounce: Duration,
    ) -> Self {
        let mut session = Self {
            shared: Arc::new(Mutex::new(SessionState::default())),
            source,
            err_tx,
            debounce,
            visibility,
            pending: None,
            load_task: None,
        };
        session.start_load();
        session
    }

    /// What: Load candidates again, e.g. after the reader's role changed.
    ///
    /// Inputs:
    /// - `visibility`: Visibility for the new load.
    ///
    /// Output:
    /// - Clears current candidates and results immediately; the new set arrives in the background.
    ///
    /// Details:
    /// - Earlier loads still in flight are not cancelled, but their outcome is discarded.
    pub fn reload(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        {
            let mut st = lock(&self.shared);
            st.candidates.clear();
            st.results.clear();
            st.loaded = false;
            st.load_error = None;
        }
        self.start_load();
    }

    /// What: Spawn a candidate load for the current visibility.
    ///
    /// Output:
    /// - Replaces `load_task`; the result applies only if no newer load started meanwhile.
    fn start_load(&mut self) {
        let generation = {
            let mut st = lock(&self.shared);
            st.load_generation += 1;
            st.load_generation
        };
        let shared = Arc::clone(&self.shared);
        let source = Arc::clone(&self.source);
        let visibility = self.visibility;
        let err_tx = self.err_tx.clone();
        tracing::debug!(?visibility, generation, "loading search candidates");

        self.load_task = Some(tokio::spawn(async move {
            let outcome = source.list_posts(visibility.list_filter()).await;
            let mut guard = lock(&shared);
            let st = &mut *guard;
            if st.load_generation != generation {
                tracing::debug!(generation, "discarding superseded candidate load");
                return;
            }
            st.loaded = true;
            match outcome {
                Ok(posts) => {
                    st.candidates = posts.into_iter().filter(|p| visibility.admits(p)).collect();
                    st.load_error = None;
                    tracing::info!(candidates = st.candidates.len(), "search candidates loaded");
                    if !st.is_searching && !is_blank_query(&st.query) {
                        st.results = filter_candidates(&st.candidates, &st.query);
                    }
                }
                Err(e) => {
                    let msg = format!("Failed to load posts for search: {e}");
                    tracing::warn!(error = %e, "search candidate load failed");
                    st.candidates.clear();
                    st.results.clear();
                    st.load_error = Some(msg.clone());
                    drop(guard);
                    if let Some(tx) = err_tx {
                        let _ = tx.send(msg);
                    }
                }
            }
        }));
    }

    /// Abort the pending debounce timer, if any.
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// What: Update the query as the user types.
    ///
    /// Inputs:
    /// - `text`: Full query text.
    ///
    /// Output:
    /// - The visible query updates at once. A blank query clears results immediately;
    ///   otherwise `is_searching` turns on and matching runs after the debounce window.
    ///
    /// Details:
    /// - Any earlier pending recomputation is cancelled, and a generation check stops
    ///   a timer that already woke from applying stale results.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.cancel_pending();
        let generation = {
            let mut st = lock(&self.shared);
            st.query_generation += 1;
            st.query = text.into();
            if is_blank_query(&st.query) {
                st.results.clear();
                st.is_searching = false;
                return;
            }
            st.is_searching = true;
            st.query_generation
        };

        let shared = Arc::clone(&self.shared);
        let delay = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut guard = lock(&shared);
            let st = &mut *guard;
            if st.query_generation != generation {
                return;
            }
            st.results = filter_candidates(&st.candidates, &st.query);
            st.is_searching = false;
            st.recomputations += 1;
            tracing::debug!(query = %st.query, matches = st.results.len(), "search recomputed");
        }));
    }

    /// Reset query and results at once, cancelling any pending recomputation.
    pub fn clear_search(&mut self) {
        self.cancel_pending();
        let mut st = lock(&self.shared);
        st.query_generation += 1;
        st.query.clear();
        st.results.clear();
        st.is_searching = false;
    }

    /// Wait until the most recent candidate load has finished.
    pub async fn wait_loaded(&mut self) {
        if let Some(handle) = self.load_task.take() {
            let _ = handle.await;
        }
    }

    /// Wait until the pending recomputation, if any, has run.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    /// Query exactly as typed.
    #[must_use]
    pub fn query(&self) -> String {
        lock(&self.shared).query.clone()
    }

    /// Last settled matches, in candidate order.
    #[must_use]
    pub fn results(&self) -> Vec<Post> {
        lock(&self.shared).results.clone()
    }

    /// A recomputation is pending.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        lock(&self.shared).is_searching
    }

    /// Settled results are non-empty.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !lock(&self.shared).results.is_empty()
    }

    /// The query has non-whitespace content.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !is_blank_query(&lock(&self.shared).query)
    }

    /// The latest candidate load has finished.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        lock(&self.shared).loaded
    }

    /// Failure message of the latest load, if it failed.
    #[must_use]
    pub fn load_error(&self) -> Option<String> {
        lock(&self.shared).load_error.clone()
    }

    /// Number of debounce recomputations that have run.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        lock(&self.shared).recomputations
    }

    /// Number of loaded candidates.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        lock(&self.shared).candidates.len()
    }

    /// Visibility used by the latest load.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel_pending();
        if let Some(handle) = self.load_task.take() {
            handle.abort();
        }
    }
}

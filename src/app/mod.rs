//! Stateful application layer: the search session and the command runtime.

/// Text rendering for list pages and pagination bars.
pub mod render;
/// Composition root for the binary.
mod runtime;
/// Debounced client-side search.
pub mod search;

pub use runtime::{execute, run};
pub use search::{SEARCH_DEBOUNCE, SearchSession};

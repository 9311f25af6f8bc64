//! Pure logic: page windows, query matching, and access policy.

pub mod access;
pub mod pagination;
pub mod query;

pub use access::can_view;
pub use pagination::{
    DEFAULT_ITEMS_PER_PAGE, PAGE_WINDOW_DELTA, Paginator, compute_page_window,
    page_number_sequence, total_pages,
};
pub use query::{filter_candidates, is_blank_query, matches_query};

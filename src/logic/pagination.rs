//! Pure page-window math plus the small stateful pager that drives it.

use crate::state::{PageMarker, PageWindow};

/// Posts shown per page when the caller does not choose.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Neighbour pages shown on each side of the current page.
pub const PAGE_WINDOW_DELTA: usize = 2;

/// Compute the number of pages for a list.
#[must_use]
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// What: Compute pagination data for one page of a list.
///
/// Inputs:
/// - `total_items`: Length of the full list.
/// - `items_per_page`: Page size; values below 1 are treated as 1.
/// - `current_page`: 1-based page to describe. Not clamped.
///
/// Output:
/// - `PageWindow` with slice bounds, navigation flags, and page markers.
///
/// Details:
/// - Never fails. An empty list yields zero pages, no markers, and both flags false.
/// - Slice bounds always satisfy `start <= end <= total_items`, even for a page past the end.
#[must_use]
pub fn compute_page_window(
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
) -> PageWindow {
    let per_page = items_per_page.max(1);
    let total_pages = total_pages(total_items, per_page);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    PageWindow {
        current_page,
        total_pages,
        start_index: start,
        end_index: end,
        has_next_page: current_page < total_pages,
        has_prev_page: current_page > 1,
        page_numbers: page_number_sequence(current_page, total_pages),
    }
}

/// What: Build the compact list of page markers shown in a pagination bar.
///
/// Inputs:
/// - `current_page`: 1-based current page.
/// - `total_pages`: Page count; zero yields an empty sequence.
///
/// Output:
/// - Page 1, an optional leading gap, up to `PAGE_WINDOW_DELTA` neighbours on
///   each side of the current page, an optional trailing gap, and the last page.
///
/// Details:
/// - A gap is only emitted when at least one page is actually skipped.
/// - Repeated page numbers are dropped keeping the first occurrence; gaps are never merged.
#[must_use]
pub fn page_number_sequence(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }

    let delta = PAGE_WINDOW_DELTA;
    let inner_start = current_page.saturating_sub(delta).max(2);
    let inner_end = current_page
        .saturating_add(delta)
        .min(total_pages.saturating_sub(1));

    let mut markers = vec![PageMarker::Page(1)];
    if current_page > delta + 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((inner_start..=inner_end).map(PageMarker::Page));
    if current_page.saturating_add(delta + 1) < total_pages {
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }

    let mut seen = std::collections::HashSet::new();
    markers.retain(|marker| match marker {
        PageMarker::Page(n) => seen.insert(*n),
        PageMarker::Ellipsis => true,
    });
    markers
}

/// Current-page state for one paginated list view.
///
/// Owns `current_page` and enforces the navigation rules: out-of-range jumps
/// and impossible next/previous moves are ignored without touching state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    /// Length of the list being paged.
    total_items: usize,
    /// Page size, at least 1.
    items_per_page: usize,
    /// 1-based current page.
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Paginator {
    /// Create a pager positioned on page 1.
    #[must_use]
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
            current_page: 1,
        }
    }

    /// What: Start the pager on a specific page.
    ///
    /// Inputs:
    /// - `page`: Requested starting page.
    ///
    /// Output:
    /// - The pager, moved to `page` when it is in range; otherwise left on page 1.
    #[must_use]
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.go_to_page(page);
        self
    }

    /// 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Length of the list being paged.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Page count for the current list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Pagination data for the current page.
    #[must_use]
    pub fn window(&self) -> PageWindow {
        compute_page_window(self.total_items, self.items_per_page, self.current_page)
    }

    /// What: Update the list length.
    ///
    /// Inputs:
    /// - `total_items`: New list length.
    ///
    /// Output:
    /// - Returns to page 1 whenever the length actually changes.
    pub fn set_total_items(&mut self, total_items: usize) {
        if total_items != self.total_items {
            self.total_items = total_items;
            self.current_page = 1;
        }
    }

    /// What: Jump to a page.
    ///
    /// Inputs:
    /// - `page`: Target page, 1-based.
    ///
    /// Output:
    /// - `true` when the page changed; `false` when `page` is outside `[1, total_pages]`
    ///   and the request was ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            tracing::trace!(page, total_pages = self.total_pages(), "ignoring page request");
            false
        }
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.window().has_next_page {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.window().has_prev_page {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// What: Borrow the items belonging to the current page.
    ///
    /// Inputs:
    /// - `items`: The full list this pager describes.
    ///
    /// Output:
    /// - Sub-slice for the current page; empty when `items` is shorter than expected.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let window = self.window();
        items.get(window.start_index..window.end_index).unwrap_or(&[])
    }
}

//! Page-window properties checked through the public API.

use blogsift::logic::{Paginator, compute_page_window, page_number_sequence, total_pages};
use blogsift::state::PageMarker;

#[test]
/// What: Page count is `ceil(total / per_page)` and zero only for an empty list.
///
/// - Input: totals 0..=60 against page sizes 1..=9
/// - Output: count matches the ceiling division; flags and bounds stay consistent
fn page_count_and_bounds_hold_for_small_grids() {
    for per_page in 1..=9usize {
        for total in 0..=60usize {
            let pages = total_pages(total, per_page);
            assert_eq!(pages, total.div_ceil(per_page));
            assert_eq!(pages == 0, total == 0);
            for page in 1..=pages.max(1) {
                let w = compute_page_window(total, per_page, page);
                assert!(w.start_index <= w.end_index && w.end_index <= total);
                assert!(w.end_index - w.start_index <= per_page);
                assert_eq!(w.has_prev_page, page > 1);
                assert_eq!(w.has_next_page, page < pages);
            }
        }
    }
}

#[test]
/// What: Every marker sequence starts at 1, ends at the last page, and never repeats a page.
fn marker_sequences_are_well_formed() {
    for pages in 1..=30usize {
        for current in 1..=pages {
            let seq = page_number_sequence(current, pages);
            assert_eq!(seq.first(), Some(&PageMarker::Page(1)));
            assert_eq!(seq.last(), Some(&PageMarker::Page(pages)));
            assert!(seq.contains(&PageMarker::Page(current)));
            let numbers: Vec<usize> = seq
                .iter()
                .filter_map(|m| match m {
                    PageMarker::Page(n) => Some(*n),
                    PageMarker::Ellipsis => None,
                })
                .collect();
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{seq:?}");
            for pair in seq.windows(2) {
                if let [PageMarker::Page(a), PageMarker::Page(b)] = pair {
                    assert_eq!(*a + 1, *b, "adjacent numbers must be consecutive: {seq:?}");
                }
                assert!(
                    !matches!(pair, [PageMarker::Ellipsis, PageMarker::Ellipsis]),
                    "{seq:?}"
                );
            }
        }
    }
}

#[test]
/// What: Rendering example from a list of 200 posts at ten per page.
fn documented_examples() {
    let w = compute_page_window(200, 10, 6);
    let shown: Vec<String> = w.page_numbers.iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["1", "…", "4", "5", "6", "7", "8", "…", "20"]);

    let w = compute_page_window(25, 10, 1);
    assert_eq!(w.total_pages, 3);
    assert_eq!(
        w.page_numbers,
        [PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)]
    );
}

#[test]
/// What: A pager walks forward and back across a list and resets when it changes size.
fn pager_walkthrough() {
    let posts: Vec<String> = (1..=13).map(|i| format!("post {i}")).collect();
    let mut pager = Paginator::new(posts.len(), 6);
    let mut seen = Vec::new();
    loop {
        seen.extend(pager.slice(&posts).iter().cloned());
        if !pager.next_page() {
            break;
        }
    }
    assert_eq!(seen, posts);
    assert_eq!(pager.current_page(), 3);
    while pager.prev_page() {}
    assert_eq!(pager.current_page(), 1);

    assert!(pager.go_to_page(2));
    pager.set_total_items(posts.len() - 1);
    assert_eq!(pager.current_page(), 1);
    assert!(!pager.go_to_page(99));
    assert_eq!(pager.current_page(), 1);
}

use std::time::Duration;

use blogsift::sources::MemorySource;

use crate::common::{greeting_posts, result_ids, session_over};

#[tokio::test(start_paused = true)]
/// What: Title and excerpt matches settle in original order.
///
/// - Input: "Hello World", "Goodbye", excerpt "say hello"; query "hello"
/// - Output: posts 1 and 3
async fn matches_title_and_excerpt_in_order() {
    let mut s = session_over(MemorySource::new(greeting_posts()));
    s.wait_loaded().await;
    s.set_query("hello");
    s.settle().await;
    assert_eq!(result_ids(&s), ["1", "3"]);
    assert!(s.has_results());
    assert!(!s.is_searching());
}

#[tokio::test(start_paused = true)]
/// What: Rapid typing inside the window recomputes once, for the last query only.
async fn rapid_typing_recomputes_once() {
    let mut s = session_over(MemorySource::new(greeting_posts()));
    s.wait_loaded().await;
    s.set_query("h");
    tokio::time::sleep(Duration::from_millis(100)).await;
    s.set_query("he");
    tokio::time::sleep(Duration::from_millis(100)).await;
    s.set_query("hello");
    assert!(s.results().is_empty());

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert_eq!(s.recomputations(), 1);
    assert_eq!(result_ids(&s), ["1", "3"]);
}

#[tokio::test(start_paused = true)]
/// What: Setting the same query twice gives the same results as once.
async fn repeated_query_is_idempotent() {
    let mut once = session_over(MemorySource::new(greeting_posts()));
    let mut twice = session_over(MemorySource::new(greeting_posts()));
    once.wait_loaded().await;
    twice.wait_loaded().await;

    once.set_query("GOOD");
    twice.set_query("GOOD");
    twice.set_query("GOOD");
    once.settle().await;
    twice.settle().await;
    assert_eq!(once.results(), twice.results());
    assert_eq!(result_ids(&twice), ["2"]);
}

#[tokio::test(start_paused = true)]
/// What: Blank queries clear results immediately without waiting for the timer.
async fn blank_query_clears_without_waiting() {
    let mut s = session_over(MemorySource::new(greeting_posts()));
    s.wait_loaded().await;
    s.set_query("hello");
    s.settle().await;
    assert!(s.has_results());

    s.set_query("   ");
    assert!(s.results().is_empty());
    assert!(!s.has_query());
    assert!(!s.is_searching());

    s.set_query("");
    assert!(!s.has_query());
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(s.results().is_empty());
}

#[tokio::test(start_paused = true)]
/// What: A newer query cancels the pending one; stale matches never appear.
async fn newer_query_wins() {
    let mut s = session_over(MemorySource::new(greeting_posts()));
    s.wait_loaded().await;
    s.set_query("goodbye");
    tokio::time::sleep(Duration::from_millis(250)).await;
    s.set_query("world");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(s.results().is_empty(), "goodbye must not settle");
    s.settle().await;
    assert_eq!(result_ids(&s), ["1"]);
    assert_eq!(s.query(), "world");
}

#[tokio::test(start_paused = true)]
/// What: Clearing with a timer pending resets synchronously and stays clear.
async fn clear_search_beats_pending_timer() {
    let mut s = session_over(MemorySource::new(greeting_posts()));
    s.wait_loaded().await;
    s.set_query("hello");
    s.settle().await;
    s.set_query("goodbye");
    s.clear_search();
    assert_eq!(s.query(), "");
    assert!(s.results().is_empty());
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(s.results().is_empty());
    assert_eq!(s.recomputations(), 1);
}

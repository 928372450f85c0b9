use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::time::{sleep, Instant};

use super::*;

const DELAY: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_emit_once_with_latest_text() {
    let (mut search, mut emissions) = SearchController::new(DELAY);
    let start = Instant::now();

    search.input("c"); // t=0
    sleep(Duration::from_millis(50)).await;
    assert!(emissions.try_recv().is_err());

    search.input("ce"); // t=50
    sleep(Duration::from_millis(50)).await;
    assert!(emissions.try_recv().is_err());

    search.input("cen"); // t=100
    sleep(Duration::from_millis(200)).await;
    assert!(emissions.try_recv().is_err(), "no emission before input pauses");

    search.input("cent"); // t=300
    assert!(search.is_pending());

    let emitted = emissions.recv().await.expect("one emission");
    assert_eq!(emitted, "cent");
    let elapsed = start.elapsed();
    assert!(
        elapsed >= Duration::from_millis(600) && elapsed < Duration::from_millis(610),
        "emitted at {elapsed:?}"
    );

    sleep(Duration::from_secs(5)).await;
    assert!(emissions.try_recv().is_err(), "exactly one emission");
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn submit_bypasses_debounce() {
    let (mut search, mut emissions) = SearchController::new(DELAY);

    search.input("books");
    search.submit();

    assert_eq!(emissions.try_recv().unwrap(), "books");
    assert!(!search.is_pending());

    // The cancelled timer must not fire later.
    sleep(DELAY * 2).await;
    assert!(emissions.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn clear_emits_empty_string_immediately() {
    let (mut search, mut emissions) = SearchController::new(DELAY);

    search.input("fresh");
    search.clear();

    assert_eq!(emissions.try_recv().unwrap(), "");
    assert_eq!(search.text(), "");

    sleep(DELAY * 2).await;
    assert!(emissions.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn deleting_to_empty_counts_as_clear() {
    let (mut search, mut emissions) = SearchController::new(DELAY);

    search.input("a");
    search.input("");

    assert_eq!(emissions.try_recv().unwrap(), "");
    sleep(DELAY * 2).await;
    assert!(emissions.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn separate_pauses_emit_separately() {
    let (mut search, mut emissions) = SearchController::new(DELAY);

    search.input("grocery");
    assert_eq!(emissions.recv().await.unwrap(), "grocery");

    search.input("grocery st");
    assert_eq!(emissions.recv().await.unwrap(), "grocery st");
}

#[tokio::test(start_paused = true)]
async fn rearming_timer_cancels_previous_expiry() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut timer = DebounceTimer::new();

    let first = Arc::clone(&fired);
    timer.arm(DELAY, move || {
        first.fetch_add(1, Ordering::SeqCst);
    });
    assert!(timer.is_armed());

    let second = Arc::clone(&fired);
    timer.arm(DELAY, move || {
        second.fetch_add(10, Ordering::SeqCst);
    });

    sleep(DELAY * 3).await;
    assert_eq!(fired.load(Ordering::SeqCst), 10);
    assert!(!timer.is_armed());
    assert!(!timer.cancel(), "nothing left to cancel after expiry");
}

#[tokio::test(start_paused = true)]
async fn dropping_controller_discards_pending_emission() {
    let (mut search, mut emissions) = SearchController::new(DELAY);
    search.input("late");
    drop(search);

    assert!(
        emissions.recv().await.is_none(),
        "channel should close without emitting"
    );
}

#[tokio::test(start_paused = true)]
async fn rearm_invalidates_expiry_already_past_its_sleep() {
    let mut timer = DebounceTimer::new();
    timer.arm(DELAY, || {});
    let superseded = timer.next_generation();
    assert!(superseded.is_current());

    // A keystroke landing while the old task is mid-poll only has the
    // generation bump to stop it.
    timer.arm(DELAY, || {});
    assert!(!superseded.is_current());
}

#[test]
fn cancel_and_drop_invalidate_pending_generation() {
    let mut timer = DebounceTimer::new();
    let pending = timer.next_generation();
    assert!(pending.is_current());
    assert!(!timer.cancel(), "no task was spawned");
    assert!(!pending.is_current());

    let timer = DebounceTimer::new();
    let pending = timer.next_generation();
    let counter = Arc::clone(&pending.current);
    drop(timer);
    assert_ne!(counter.load(Ordering::Acquire), pending.mine);
}

#![allow(clippy::unwrap_used)]
// Integration tests for `Store` load sequencing, driven by a scripted
// data source on a paused tokio clock.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use tokio_test::{assert_pending, assert_ready, task};

use trinket_core::{ApiError, DataAccess, SimulatedApi, Store};

// ── Helpers ─────────────────────────────────────────────────────────

type Reply = (Duration, Result<Vec<u32>, &'static str>);

/// Data source that answers each request from a queue of canned replies.
///
/// An exhausted queue answers with an empty list immediately.
#[derive(Default)]
struct ScriptedAccess {
    widgets: Mutex<VecDeque<Reply>>,
    weebles: Mutex<VecDeque<Reply>>,
    widget_calls: AtomicUsize,
    weeble_calls: AtomicUsize,
}

impl ScriptedAccess {
    fn new() -> Self {
        Self::default()
    }

    fn widgets(self, reply: Result<Vec<u32>, &'static str>) -> Self {
        self.widgets_after(Duration::ZERO, reply)
    }

    fn weebles(self, reply: Result<Vec<u32>, &'static str>) -> Self {
        self.weebles_after(Duration::ZERO, reply)
    }

    fn widgets_after(self, delay: Duration, reply: Result<Vec<u32>, &'static str>) -> Self {
        self.widgets.lock().unwrap().push_back((delay, reply));
        self
    }

    fn weebles_after(self, delay: Duration, reply: Result<Vec<u32>, &'static str>) -> Self {
        self.weebles.lock().unwrap().push_back((delay, reply));
        self
    }

    fn widget_calls(&self) -> usize {
        self.widget_calls.load(Ordering::SeqCst)
    }

    fn weeble_calls(&self) -> usize {
        self.weeble_calls.load(Ordering::SeqCst)
    }
}

async fn play(queue: &Mutex<VecDeque<Reply>>) -> Result<Vec<u32>, &'static str> {
    let next = queue.lock().unwrap().pop_front();
    let (delay, reply) = next.unwrap_or((Duration::ZERO, Ok(Vec::new())));
    tokio::time::sleep(delay).await;
    reply
}

impl DataAccess for ScriptedAccess {
    type Widget = u32;
    type Weeble = u32;
    type Error = &'static str;

    async fn fetch_widgets(&self) -> Result<Vec<u32>, &'static str> {
        self.widget_calls.fetch_add(1, Ordering::SeqCst);
        play(&self.widgets).await
    }

    async fn fetch_weebles(&self) -> Result<Vec<u32>, &'static str> {
        self.weeble_calls.fetch_add(1, Ordering::SeqCst);
        play(&self.weebles).await
    }
}

// ── Initial state ───────────────────────────────────────────────────

#[tokio::test]
async fn test_new_store_has_empty_collections() {
    let store = Store::new(ScriptedAccess::new());
    let state = store.state();
    assert!(state.widgets.is_empty());
    assert!(state.weebles.is_empty());
}

#[tokio::test]
async fn test_construction_fetches_nothing() {
    let store = Store::new(ScriptedAccess::new());
    assert_eq!(store.access().widget_calls(), 0);
    assert_eq!(store.access().weeble_calls(), 0);
}

// ── Single loads ────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_widgets_stores_widgets() {
    let store = Store::new(ScriptedAccess::new().widgets(Ok(vec![1, 2, 3])));

    let loaded = store.load_widgets().await.unwrap();

    assert_eq!(*loaded, vec![1, 2, 3]);
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
    assert!(store.state().weebles.is_empty());
    assert_eq!(store.access().weeble_calls(), 0);
}

#[tokio::test]
async fn test_load_weebles_stores_weebles() {
    let store = Store::new(ScriptedAccess::new().weebles(Ok(vec![1, 2, 3])));

    store.load_weebles().await.unwrap();

    assert_eq!(*store.state().weebles, vec![1, 2, 3]);
    assert!(store.state().widgets.is_empty());
    assert_eq!(store.access().widget_calls(), 0);
}

#[tokio::test]
async fn test_repeated_loads_overwrite() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1, 2, 3]))
            .widgets(Ok(vec![9])),
    );

    store.load_widgets().await.unwrap();
    store.load_widgets().await.unwrap();

    assert_eq!(*store.state().widgets, vec![9]);
    assert_eq!(store.widgets_revision(), 2);
}

#[tokio::test]
async fn test_failed_load_propagates_error_and_keeps_state() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1, 2, 3]))
            .widgets(Err("Something went wrong")),
    );

    store.load_widgets().await.unwrap();
    let before = store.last_loaded();
    let err = store.load_widgets().await.unwrap_err();

    assert_eq!(err, "Something went wrong");
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
    assert_eq!(store.widgets_revision(), 1);
    assert_eq!(store.last_loaded(), before);
}

#[tokio::test]
async fn test_failed_weeble_load_propagates_error_and_keeps_state() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1, 2, 3]))
            .weebles(Ok(vec![4, 5]))
            .weebles(Err("weebles offline")),
    );

    store.load_widgets().await.unwrap();
    store.load_weebles().await.unwrap();
    let err = store.load_weebles().await.unwrap_err();

    assert_eq!(err, "weebles offline");
    assert_eq!(*store.state().weebles, vec![4, 5]);
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
    assert_eq!(store.weebles_revision(), 1);
}

#[tokio::test]
async fn test_load_widgets_leaves_loaded_weebles_alone() {
    let store = Store::new(
        ScriptedAccess::new()
            .weebles(Ok(vec![4, 5, 6]))
            .widgets(Ok(vec![1])),
    );

    store.load_weebles().await.unwrap();
    let weebles = store.weebles_snapshot();
    store.load_widgets().await.unwrap();

    assert_eq!(*store.state().widgets, vec![1]);
    assert_eq!(*store.state().weebles, vec![4, 5, 6]);
    assert!(Arc::ptr_eq(&weebles, &store.weebles_snapshot()));
    assert_eq!(store.weebles_revision(), 1);
}

#[tokio::test]
async fn test_load_weebles_leaves_loaded_widgets_alone() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1, 2, 3]))
            .weebles(Ok(vec![7])),
    );

    store.load_widgets().await.unwrap();
    let widgets = store.widgets_snapshot();
    store.load_weebles().await.unwrap();

    assert_eq!(*store.state().weebles, vec![7]);
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
    assert!(Arc::ptr_eq(&widgets, &store.widgets_snapshot()));
    assert_eq!(store.widgets_revision(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_store_unchanged_while_fetch_is_pending() {
    let store = Store::new(
        ScriptedAccess::new().widgets_after(Duration::from_millis(100), Ok(vec![1, 2, 3])),
    );

    let mut load = task::spawn(store.load_widgets());
    assert_pending!(load.poll());
    assert_eq!(store.access().widget_calls(), 1);
    assert!(store.state().widgets.is_empty());

    tokio::time::advance(Duration::from_millis(99)).await;
    assert_pending!(load.poll());
    assert!(store.state().widgets.is_empty());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(load.is_woken());
    let loaded = assert_ready!(load.poll()).unwrap();
    assert_eq!(*loaded, vec![1, 2, 3]);
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_successful_load_records_timestamp() {
    let store = Store::new(ScriptedAccess::new().weebles(Ok(vec![1])));
    assert!(store.last_loaded().is_none());

    store.load_weebles().await.unwrap();

    assert!(store.last_loaded().is_some());
    assert!(store.data_age().unwrap() >= chrono::Duration::zero());
}

// ── load_all ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_all_loads_both() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1, 2, 3]))
            .weebles(Ok(vec![4, 5, 6])),
    );

    let state = store.load_all().await.unwrap();

    assert_eq!(*state.widgets, vec![1, 2, 3]);
    assert_eq!(*state.weebles, vec![4, 5, 6]);
    assert_eq!(state, store.state());
}

#[tokio::test]
async fn test_load_all_short_circuits_on_widget_failure() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Err("widgets down"))
            .weebles(Ok(vec![4, 5, 6])),
    );

    let err = store.load_all().await.unwrap_err();

    assert_eq!(err, "widgets down");
    assert_eq!(store.access().widget_calls(), 1);
    assert_eq!(store.access().weeble_calls(), 0);
    assert!(store.state().is_empty());
}

#[tokio::test]
async fn test_load_all_keeps_widgets_when_weebles_fail() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1, 2, 3]))
            .weebles(Err("weebles down")),
    );

    let err = store.load_all().await.unwrap_err();

    assert_eq!(err, "weebles down");
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
    assert!(store.state().weebles.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_load_all_is_sequential() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets_after(Duration::from_millis(100), Ok(vec![1]))
            .weebles_after(Duration::from_millis(100), Ok(vec![2])),
    );

    let start = tokio::time::Instant::now();
    store.load_all().await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(200));
}

// ── load_all_concurrent ─────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_load_all_concurrent_overlaps_fetches() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets_after(Duration::from_millis(100), Ok(vec![1, 2, 3]))
            .weebles_after(Duration::from_millis(100), Ok(vec![4, 5, 6])),
    );

    let start = tokio::time::Instant::now();
    let state = store.load_all_concurrent().await.unwrap();

    assert!(start.elapsed() < Duration::from_millis(200));
    assert_eq!(*state.widgets, vec![1, 2, 3]);
    assert_eq!(*state.weebles, vec![4, 5, 6]);
}

#[tokio::test(start_paused = true)]
async fn test_load_all_concurrent_fails_on_first_rejection() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets_after(Duration::from_millis(10), Err("widgets down"))
            .weebles_after(Duration::from_millis(100), Ok(vec![4, 5, 6])),
    );

    let start = tokio::time::Instant::now();
    let err = store.load_all_concurrent().await.unwrap_err();

    assert_eq!(err, "widgets down");
    assert!(start.elapsed() < Duration::from_millis(100));
    assert_eq!(store.access().weeble_calls(), 1);
    // The weeble fetch was dropped before it settled.
    assert!(store.state().weebles.is_empty());
    assert_eq!(store.weebles_revision(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_load_all_concurrent_keeps_the_half_that_settled_first() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets_after(Duration::from_millis(10), Ok(vec![1, 2, 3]))
            .weebles_after(Duration::from_millis(50), Err("weebles down")),
    );

    let err = store.load_all_concurrent().await.unwrap_err();

    assert_eq!(err, "weebles down");
    assert_eq!(*store.state().widgets, vec![1, 2, 3]);
    assert!(store.state().weebles.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_load_all_concurrent_reports_earliest_rejection() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets_after(Duration::from_millis(50), Err("widgets down"))
            .weebles_after(Duration::from_millis(10), Err("weebles down")),
    );

    assert_eq!(store.load_all_concurrent().await.unwrap_err(), "weebles down");
}

// ── Overlapping loads ───────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_overlapping_loads_last_settle_wins() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets_after(Duration::from_millis(200), Ok(vec![1]))
            .widgets_after(Duration::from_millis(50), Ok(vec![2])),
    );

    let (slow, fast) = tokio::join!(store.load_widgets(), store.load_widgets());

    assert_eq!(*slow.unwrap(), vec![1]);
    assert_eq!(*fast.unwrap(), vec![2]);
    // The slow fetch settled last, so its result is what remains.
    assert_eq!(*store.state().widgets, vec![1]);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_load_leaves_state_untouched() {
    let store = Store::new(
        ScriptedAccess::new().widgets_after(Duration::from_secs(1), Ok(vec![1, 2, 3])),
    );

    let abandoned =
        tokio::time::timeout(Duration::from_millis(10), store.load_widgets()).await;

    assert!(abandoned.is_err());
    assert!(store.state().widgets.is_empty());
    assert_eq!(store.widgets_revision(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_spawned_load_completes_independently() {
    let store = Store::new(
        ScriptedAccess::new().weebles_after(Duration::from_millis(100), Ok(vec![7])),
    );

    let handle = tokio::spawn({
        let store = store.clone();
        async move { store.load_weebles().await }
    });
    handle.await.unwrap().unwrap();

    assert_eq!(*store.state().weebles, vec![7]);
}

// ── Subscriptions ───────────────────────────────────────────────────

#[tokio::test]
async fn test_subscribers_observe_successful_loads() {
    let store = Store::new(ScriptedAccess::new().widgets(Ok(vec![1, 2])));
    let mut widgets = store.subscribe_widgets();
    assert!(widgets.current().is_empty());

    store.load_widgets().await.unwrap();

    let snap = widgets.changed().await.unwrap();
    assert_eq!(*snap, vec![1, 2]);
    assert_eq!(**widgets.current(), vec![1, 2]);
}

#[tokio::test]
async fn test_failed_load_notifies_nobody() {
    let store = Store::new(ScriptedAccess::new().weebles(Err("nope")));
    let weebles = store.subscribe_weebles();

    assert_eq!(store.load_weebles().await.unwrap_err(), "nope");

    assert!(weebles.latest().is_empty());
    assert_eq!(store.weebles_revision(), 0);
}

#[tokio::test]
async fn test_stream_yields_current_then_changes() {
    let store = Store::new(
        ScriptedAccess::new()
            .widgets(Ok(vec![1]))
            .widgets(Ok(vec![2, 3])),
    );
    let mut stream = store.subscribe_widgets().into_stream();

    assert!(stream.next().await.unwrap().is_empty());

    store.load_widgets().await.unwrap();
    assert_eq!(*stream.next().await.unwrap(), vec![1]);

    store.load_widgets().await.unwrap();
    assert_eq!(*stream.next().await.unwrap(), vec![2, 3]);
}

#[tokio::test]
async fn test_changed_returns_none_after_store_dropped() {
    let store = Store::new(ScriptedAccess::new());
    let mut widgets = store.subscribe_widgets();
    drop(store);
    assert!(widgets.changed().await.is_none());
}

// ── Shared data source handles ──────────────────────────────────────

#[tokio::test]
async fn test_arc_access_lets_caller_keep_a_handle() {
    let access = Arc::new(ScriptedAccess::new().widgets(Err("boom")));
    let store = Store::new(Arc::clone(&access));

    assert_eq!(store.load_all().await.unwrap_err(), "boom");

    assert_eq!(access.widget_calls(), 1);
    assert_eq!(access.weeble_calls(), 0);
}

#[tokio::test]
async fn test_borrowed_access() {
    let access = ScriptedAccess::new().weebles(Ok(vec![3]));
    let store = Store::new(&access);

    store.load_weebles().await.unwrap();

    assert_eq!(*store.state().weebles, vec![3]);
    assert_eq!(access.weeble_calls(), 1);
}

// ── Simulated source ────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_simulated_api_end_to_end() {
    let store = Store::new(
        SimulatedApi::builder()
            .widgets(["a", "b"])
            .weebles(["c"])
            .build(),
    );

    let state = store.load_all().await.unwrap();

    assert_eq!(*state.widgets, vec!["a", "b"]);
    assert_eq!(*state.weebles, vec!["c"]);
    assert_eq!(store.access().widget_calls(), 1);
    assert_eq!(store.access().weeble_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_rejection_passes_through_unchanged() {
    let store = Store::new(
        SimulatedApi::builder()
            .widgets([1u32])
            .fail_weebles("Something went wrong")
            .build(),
    );

    let err = store.load_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Rejected { ref message, .. } if message == "Something went wrong"));
    assert_eq!(*store.state().widgets, vec![1]);
}

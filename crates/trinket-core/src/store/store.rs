// ── Central store ──
//
// Owns both collections plus load metadata. Cheap to clone: all clones
// share one inner record, and the store is the only writer to it.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

use super::collection::Collection;
use crate::access::{DataAccess, Detached};
use crate::stream::CollectionStream;

// ── StoreState ───────────────────────────────────────────────────

/// Point-in-time snapshot of both collections.
///
/// Holding a `StoreState` never blocks the store: later loads swap in new
/// lists rather than editing these.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StoreState<W, B> {
    pub widgets: Arc<Vec<W>>,
    pub weebles: Arc<Vec<B>>,
}

impl<W, B> StoreState<W, B> {
    /// `true` when neither collection holds any items.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty() && self.weebles.is_empty()
    }
}

impl<W, B> Clone for StoreState<W, B> {
    fn clone(&self) -> Self {
        Self {
            widgets: Arc::clone(&self.widgets),
            weebles: Arc::clone(&self.weebles),
        }
    }
}

impl<W, B> Default for StoreState<W, B> {
    fn default() -> Self {
        Self {
            widgets: Arc::new(Vec::new()),
            weebles: Arc::new(Vec::new()),
        }
    }
}

// ── Store ────────────────────────────────────────────────────────

/// State container for the `widgets` and `weebles` collections.
///
/// Cheaply cloneable via `Arc<StoreInner>`. `D` is the injected data
/// source; a store built with [`Store::detached()`] has none and can only
/// be read.
pub struct Store<W, B, D = Detached> {
    pub(super) inner: Arc<StoreInner<W, B, D>>,
}

pub(super) struct StoreInner<W, B, D> {
    pub(super) access: D,
    pub(super) widgets: Collection<W>,
    pub(super) weebles: Collection<B>,
    pub(super) last_loaded: watch::Sender<Option<DateTime<Utc>>>,
}

impl<W, B> Store<W, B, Detached> {
    /// Create a store with no data source. Both collections stay empty.
    pub fn detached() -> Self {
        Self::with_access(Detached)
    }
}

impl<D: DataAccess> Store<D::Widget, D::Weeble, D> {
    /// Create a store that loads through `access`.
    ///
    /// Nothing is fetched until one of the load operations is called.
    pub fn new(access: D) -> Self {
        Self::with_access(access)
    }
}

impl<W, B, D> Store<W, B, D> {
    fn with_access(access: D) -> Self {
        let (last_loaded, _) = watch::channel(None);
        Self {
            inner: Arc::new(StoreInner {
                access,
                widgets: Collection::new(),
                weebles: Collection::new(),
                last_loaded,
            }),
        }
    }

    /// Access the injected data source.
    pub fn access(&self) -> &D {
        &self.inner.access
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    /// Current snapshot of both collections.
    pub fn state(&self) -> StoreState<W, B> {
        StoreState {
            widgets: self.inner.widgets.snapshot(),
            weebles: self.inner.weebles.snapshot(),
        }
    }

    pub fn widgets_snapshot(&self) -> Arc<Vec<W>> {
        self.inner.widgets.snapshot()
    }

    pub fn weebles_snapshot(&self) -> Arc<Vec<B>> {
        self.inner.weebles.snapshot()
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn widget_count(&self) -> usize {
        self.inner.widgets.len()
    }

    pub fn weeble_count(&self) -> usize {
        self.inner.weebles.len()
    }

    /// Number of successful widget loads applied so far.
    pub fn widgets_revision(&self) -> u64 {
        self.inner.widgets.revision()
    }

    /// Number of successful weeble loads applied so far.
    pub fn weebles_revision(&self) -> u64 {
        self.inner.weebles.revision()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_widgets(&self) -> CollectionStream<W>
    where
        W: Send + Sync + 'static,
    {
        CollectionStream::new(self.inner.widgets.subscribe())
    }

    pub fn subscribe_weebles(&self) -> CollectionStream<B>
    where
        B: Send + Sync + 'static,
    {
        CollectionStream::new(self.inner.weebles.subscribe())
    }

    // ── Metadata ─────────────────────────────────────────────────────

    /// When any collection was last loaded successfully.
    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        *self.inner.last_loaded.borrow()
    }

    /// How long ago the last successful load occurred, or `None` if nothing
    /// has been loaded yet.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_loaded().map(|t| Utc::now() - t)
    }
}

impl<W, B, D> StoreInner<W, B, D> {
    pub(super) fn apply_widgets(&self, widgets: Vec<W>) -> Arc<Vec<W>> {
        let snapshot = self.widgets.replace(widgets);
        self.touch();
        snapshot
    }

    pub(super) fn apply_weebles(&self, weebles: Vec<B>) -> Arc<Vec<B>> {
        let snapshot = self.weebles.replace(weebles);
        self.touch();
        snapshot
    }

    fn touch(&self) {
        self.last_loaded.send_replace(Some(Utc::now()));
    }
}

impl<W, B, D> Clone for Store<W, B, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W, B, D> fmt::Debug for Store<W, B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("widgets", &self.widget_count())
            .field("weebles", &self.weeble_count())
            .field("last_loaded", &self.last_loaded())
            .finish_non_exhaustive()
    }
}

impl<W, B> Default for Store<W, B, Detached> {
    fn default() -> Self {
        Self::detached()
    }
}

// ── Reactive collection streams ──
//
// Subscription types for consuming collection changes from the Store.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to one of the store's collections.
///
/// Provides both point-in-time snapshot access and change notification via
/// [`changed()`](Self::changed) or by converting into a `Stream`. Only
/// successful loads produce a change; failed loads are invisible here.
pub struct CollectionStream<T: Send + Sync + 'static> {
    current: Arc<Vec<T>>,
    receiver: watch::Receiver<Arc<Vec<T>>>,
}

impl<T: Send + Sync + 'static> CollectionStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<T>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time (or at the last
    /// [`changed()`](Self::changed)).
    pub fn current(&self) -> &Arc<Vec<T>> {
        &self.current
    }

    /// Get the latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<Vec<T>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once every handle to the store has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<T>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = Arc::clone(&snap);
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    ///
    /// The stream yields the current snapshot first, then one item per
    /// subsequent change.
    pub fn into_stream(self) -> CollectionWatchStream<T> {
        CollectionWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct CollectionWatchStream<T: Send + Sync + 'static> {
    inner: WatchStream<Arc<Vec<T>>>,
}

impl<T: Send + Sync + 'static> Stream for CollectionWatchStream<T> {
    type Item = Arc<Vec<T>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin, so re-pinning the field is fine.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

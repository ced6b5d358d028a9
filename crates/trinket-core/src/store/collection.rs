// ── Snapshot-swapping collection ──
//
// A single ordered list held behind a `watch` channel. Writers replace the
// whole list; readers and subscribers always see a complete snapshot.

use std::sync::Arc;

use tokio::sync::watch;

/// One collection of opaque items.
///
/// Every replacement bumps a revision counter and swaps the snapshot that
/// subscribers receive. There is no in-place editing: a snapshot handed out
/// earlier never changes under its holder.
pub(crate) struct Collection<T> {
    /// Number of replacements applied so far.
    revision: watch::Sender<u64>,

    /// Current contents, in the order they were supplied.
    snapshot: watch::Sender<Arc<Vec<T>>>,
}

impl<T> Collection<T> {
    pub(crate) fn new() -> Self {
        let (revision, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self { revision, snapshot }
    }

    /// Replace the contents wholesale and return the new snapshot.
    pub(crate) fn replace(&self, items: Vec<T>) -> Arc<Vec<T>> {
        let items = Arc::new(items);
        // `send_replace` updates unconditionally, even with zero receivers.
        self.snapshot.send_replace(Arc::clone(&items));
        self.revision.send_modify(|r| *r += 1);
        items
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.snapshot.borrow())
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }
}

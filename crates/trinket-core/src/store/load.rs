// ── Load operations ──
//
// Each load suspends on the data source, then replaces exactly one
// collection. Nothing is written until the fetch resolves, so a failed
// (or abandoned) load leaves the store untouched.

use std::sync::Arc;

use super::{Store, StoreState};
use crate::access::DataAccess;

impl<D: DataAccess> Store<D::Widget, D::Weeble, D> {
    /// Fetch widgets and replace the `widgets` collection.
    ///
    /// Resolves with the newly stored list. On failure the source's error
    /// is returned as-is and `widgets` keeps its previous contents.
    ///
    /// Overlapping calls are not serialized: whichever fetch settles last
    /// determines the stored list.
    pub async fn load_widgets(&self) -> Result<Arc<Vec<D::Widget>>, D::Error> {
        let widgets = self.inner.access.fetch_widgets().await?;
        Ok(self.inner.apply_widgets(widgets))
    }

    /// Fetch weebles and replace the `weebles` collection.
    ///
    /// Same contract as [`load_widgets()`](Self::load_widgets).
    pub async fn load_weebles(&self) -> Result<Arc<Vec<D::Weeble>>, D::Error> {
        let weebles = self.inner.access.fetch_weebles().await?;
        Ok(self.inner.apply_weebles(weebles))
    }

    /// Load widgets, then weebles, one after the other.
    ///
    /// If the widget load fails, weebles are never fetched and that error
    /// is returned. If the weeble load fails, its error is returned and the
    /// widgets already stored stay in place. On success resolves with the
    /// resulting snapshot.
    pub async fn load_all(&self) -> Result<StoreState<D::Widget, D::Weeble>, D::Error> {
        self.load_widgets().await?;
        self.load_weebles().await?;
        Ok(self.state())
    }

    /// Load both collections concurrently.
    ///
    /// Fails as soon as either fetch rejects, with that fetch's error; the
    /// other fetch is dropped and its collection keeps its previous
    /// contents. A fetch that succeeded before the rejection stays applied.
    pub async fn load_all_concurrent(
        &self,
    ) -> Result<StoreState<D::Widget, D::Weeble>, D::Error> {
        tokio::try_join!(self.load_widgets(), self.load_weebles())?;
        Ok(self.state())
    }
}

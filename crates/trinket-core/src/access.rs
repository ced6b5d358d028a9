// ── Data access seam ──
//
// The store never talks to a concrete source. It is handed something that
// can fetch the two collections and treats the results as opaque.

use std::future::Future;
use std::sync::Arc;

use trinket_api::SimulatedApi;

/// Capability to fetch both collections asynchronously.
///
/// Item and error types are opaque to the store: items are stored in the
/// order returned, errors are handed back to the caller of the load that
/// triggered them without being wrapped.
pub trait DataAccess: Send + Sync {
    type Widget: Send + Sync + 'static;
    type Weeble: Send + Sync + 'static;
    type Error: Send + 'static;

    fn fetch_widgets(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Widget>, Self::Error>> + Send;

    fn fetch_weebles(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Weeble>, Self::Error>> + Send;
}

/// Marker for a store constructed without a collaborator.
///
/// Does not implement [`DataAccess`], so load operations are unavailable
/// on `Store<_, _, Detached>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

impl<D: DataAccess> DataAccess for Arc<D> {
    type Widget = D::Widget;
    type Weeble = D::Weeble;
    type Error = D::Error;

    fn fetch_widgets(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Widget>, Self::Error>> + Send {
        (**self).fetch_widgets()
    }

    fn fetch_weebles(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Weeble>, Self::Error>> + Send {
        (**self).fetch_weebles()
    }
}

impl<D: DataAccess> DataAccess for &D {
    type Widget = D::Widget;
    type Weeble = D::Weeble;
    type Error = D::Error;

    fn fetch_widgets(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Widget>, Self::Error>> + Send {
        (**self).fetch_widgets()
    }

    fn fetch_weebles(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Weeble>, Self::Error>> + Send {
        (**self).fetch_weebles()
    }
}

impl<T: Clone + Send + Sync + 'static> DataAccess for SimulatedApi<T> {
    type Widget = T;
    type Weeble = T;
    type Error = trinket_api::Error;

    fn fetch_widgets(&self) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send {
        self.list_widgets()
    }

    fn fetch_weebles(&self) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send {
        self.list_weebles()
    }
}

// ── Widget / weeble store ──
//
// Whole-collection storage with push-based change notification.

mod collection;
mod load;
#[allow(clippy::module_inception)]
mod store;

pub use store::{Store, StoreState};

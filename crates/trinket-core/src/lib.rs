//! Asynchronous state container for two item collections.
//!
//! This crate owns the store and the seam it loads through:
//!
//! - **[`Store`]** — Holds the `widgets` and `weebles` collections. Each
//!   load operation awaits the injected [`DataAccess`] implementation and
//!   replaces one collection wholesale once the fetch resolves.
//!   [`Store::load_all()`] chains the two loads in order and stops at the
//!   first failure.
//!
//! - **[`StoreState`]** — Cheap snapshot of both collections (`Arc` clones),
//!   returned by [`Store::state()`].
//!
//! - **[`DataAccess`]** — The collaborator trait. Items and errors are
//!   associated types the store never inspects; failures reach the caller
//!   unchanged.
//!
//! - **[`CollectionStream<T>`]** — Subscription handle vended by the store.
//!   Exposes `current()` / `latest()` / `changed()` for reactive consumers.
//!
//! A store built with [`Store::detached()`] has no collaborator, so its load
//! operations simply do not exist:
//!
//! ```compile_fail
//! # async fn demo() {
//! let store = trinket_core::Store::<u32, u32>::detached();
//! store.load_widgets().await;
//! # }
//! ```

pub mod access;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use access::{DataAccess, Detached};
pub use store::{Store, StoreState};
pub use stream::{CollectionStream, CollectionWatchStream};

// The bundled simulated source, so consumers need not depend on
// `trinket-api` directly.
pub use trinket_api::{Error as ApiError, Resource, SimulatedApi};

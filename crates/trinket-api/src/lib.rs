// trinket-api: Simulated asynchronous data source for trinket stores.
//
// Stands in for a remote service: every request settles after a fixed
// latency, either with the configured items or with a rejection.

pub mod delay;
pub mod error;
pub mod simulated;

pub use delay::{opaque, rejected, settle};
pub use error::{Error, Resource};
pub use simulated::{DEFAULT_LATENCY, SimulatedApi, SimulatedApiBuilder};

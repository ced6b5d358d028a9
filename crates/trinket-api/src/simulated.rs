// Simulated item source
//
// Serves two fixed item lists with artificial latency. Either endpoint can
// be configured to reject instead, and every request is counted so callers
// can assert which endpoints were actually hit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::delay::settle;
use crate::error::{Error, Resource};

/// Latency applied to every request unless overridden.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// An in-process stand-in for a remote widget/weeble service.
///
/// Items are cloned out on every request, so repeated requests return the
/// same lists in the same order.
#[derive(Debug)]
pub struct SimulatedApi<T> {
    widgets: Vec<T>,
    weebles: Vec<T>,
    latency: Duration,
    widget_failure: Option<String>,
    weeble_failure: Option<String>,
    widget_calls: AtomicUsize,
    weeble_calls: AtomicUsize,
}

impl<T: Clone> SimulatedApi<T> {
    pub fn builder() -> SimulatedApiBuilder<T> {
        SimulatedApiBuilder::default()
    }

    /// List all widgets.
    pub async fn list_widgets(&self) -> Result<Vec<T>, Error> {
        let call = self.widget_calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(call, latency = ?self.latency, "listing widgets");
        self.respond(Resource::Widgets).await
    }

    /// List all weebles.
    pub async fn list_weebles(&self) -> Result<Vec<T>, Error> {
        let call = self.weeble_calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(call, latency = ?self.latency, "listing weebles");
        self.respond(Resource::Weebles).await
    }

    async fn respond(&self, resource: Resource) -> Result<Vec<T>, Error> {
        let (items, failure) = match resource {
            Resource::Widgets => (&self.widgets, &self.widget_failure),
            Resource::Weebles => (&self.weebles, &self.weeble_failure),
        };

        let outcome = match failure {
            Some(message) => Err(Error::Rejected {
                resource,
                message: message.clone(),
            }),
            None => Ok(items.clone()),
        };

        let result = settle(outcome, self.latency).await;
        if let Err(ref e) = result {
            debug!(error = %e, "simulated request rejected");
        }
        result
    }
}

impl<T> SimulatedApi<T> {
    /// Number of widget requests started so far.
    pub fn widget_calls(&self) -> usize {
        self.widget_calls.load(Ordering::SeqCst)
    }

    /// Number of weeble requests started so far.
    pub fn weeble_calls(&self) -> usize {
        self.weeble_calls.load(Ordering::SeqCst)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

// ── Builder ──────────────────────────────────────────────────────────

/// Builder for [`SimulatedApi`]. Both lists start empty and neither
/// endpoint fails unless told to.
#[derive(Debug)]
pub struct SimulatedApiBuilder<T> {
    widgets: Vec<T>,
    weebles: Vec<T>,
    latency: Duration,
    widget_failure: Option<String>,
    weeble_failure: Option<String>,
}

impl<T> Default for SimulatedApiBuilder<T> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            weebles: Vec::new(),
            latency: DEFAULT_LATENCY,
            widget_failure: None,
            weeble_failure: None,
        }
    }
}

impl<T> SimulatedApiBuilder<T> {
    pub fn widgets(mut self, widgets: impl IntoIterator<Item = T>) -> Self {
        self.widgets = widgets.into_iter().collect();
        self
    }

    pub fn weebles(mut self, weebles: impl IntoIterator<Item = T>) -> Self {
        self.weebles = weebles.into_iter().collect();
        self
    }

    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every widget request reject with `message`.
    pub fn fail_widgets(mut self, message: impl Into<String>) -> Self {
        self.widget_failure = Some(message.into());
        self
    }

    /// Make every weeble request reject with `message`.
    pub fn fail_weebles(mut self, message: impl Into<String>) -> Self {
        self.weeble_failure = Some(message.into());
        self
    }

    pub fn build(self) -> SimulatedApi<T> {
        SimulatedApi {
            widgets: self.widgets,
            weebles: self.weebles,
            latency: self.latency,
            widget_failure: self.widget_failure,
            weeble_failure: self.weeble_failure,
            widget_calls: AtomicUsize::new(0),
            weeble_calls: AtomicUsize::new(0),
        }
    }
}

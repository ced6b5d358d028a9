use std::fmt;

use thiserror::Error;

/// Which collection a simulated request was serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Widgets,
    Weebles,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widgets => "widgets",
            Self::Weebles => "weebles",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for the `trinket-api` crate.
///
/// The simulated source only ever fails one way: the request is rejected
/// with the message it was configured with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source rejected the request.
    #[error("{resource} request rejected: {message}")]
    Rejected { resource: Resource, message: String },
}

impl Error {
    /// The collection whose request failed.
    pub fn resource(&self) -> Resource {
        match self {
            Self::Rejected { resource, .. } => *resource,
        }
    }

    /// The rejection message, without the resource prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
        }
    }
}

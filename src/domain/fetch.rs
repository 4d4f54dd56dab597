//! Tagged outcome of a single remote lookup.
//!
//! Every call to the GitHub API resolves to one of three states. A 404 is not
//! an error: it means the resource does not exist and callers fall back to a
//! default. Only non-404 failures carry a [`FetchError`].

use thiserror::Error;

/// Errors raised by a remote lookup that is neither a success nor a 404.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("GitHub API error: {status} {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

/// Result of a remote lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    /// The resource exists and was decoded.
    Found(T),
    /// The resource does not exist or could not be reached.
    Absent,
    /// The API answered with an error status or an undecodable body.
    Failed(FetchError),
}

impl<T> Fetch<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetch<U> {
        match self {
            Fetch::Found(value) => Fetch::Found(f(value)),
            Fetch::Absent => Fetch::Absent,
            Fetch::Failed(err) => Fetch::Failed(err),
        }
    }

    /// Chains a lookup that may itself turn out absent.
    pub fn and_then<U, F: FnOnce(T) -> Fetch<U>>(self, f: F) -> Fetch<U> {
        match self {
            Fetch::Found(value) => f(value),
            Fetch::Absent => Fetch::Absent,
            Fetch::Failed(err) => Fetch::Failed(err),
        }
    }

    /// Collapses `Absent` and `Failed` into `None`.
    pub fn found(self) -> Option<T> {
        match self {
            Fetch::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Fetch::Found(_))
    }
}

impl<T: Default> Fetch<T> {
    /// Returns the found value or `T::default()` for optional data.
    pub fn or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

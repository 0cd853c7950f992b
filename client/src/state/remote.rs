//! Load state for one remote resource.
//!
//! DESIGN
//! ======
//! Every fetch takes a token from [`RemoteData::begin`] and hands it back to
//! [`RemoteData::resolve`]. Only the response for the latest token is applied,
//! so a slow poll can never overwrite the result of a newer request.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::error::ApiError;

/// Token identifying one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone, Debug)]
pub struct RemoteData<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None, latest: 0 }
    }
}

impl<T> RemoteData<T> {
    /// Start a request; older tokens become stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        RequestToken(self.latest)
    }

    /// Apply a response. Returns `false` (and changes nothing) when `token`
    /// is stale.
    ///
    /// Errors keep the last good data so polling screens do not blank out.
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, ApiError>) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// First load still pending with nothing to show.
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none() && self.error.is_none()
    }

    /// Failed with nothing to show; the screen renders the retry panel.
    pub fn failed_empty(&self) -> Option<&str> {
        if self.data.is_none() { self.error.as_deref() } else { None }
    }
}

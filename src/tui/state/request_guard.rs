//! "Latest request wins" register for listing fetches.
//!
//! Each fetch is tagged with a [`RequestId`] when it starts. When the result
//! comes back it is applied only if no newer request has been issued since,
//! so a slow response can never overwrite a faster, newer one.

use std::fmt;

/// Identifier captured by a fetch when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single-writer register holding the most recently issued request.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    /// Creates a guard with no request issued.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issues a new request id, superseding every earlier one.
    pub const fn issue(&mut self) -> RequestId {
        self.latest = self.latest.wrapping_add(1);
        RequestId(self.latest)
    }

    /// Returns true if `id` is the most recently issued request.
    #[must_use]
    pub const fn is_current(&self, id: RequestId) -> bool {
        self.latest != 0 && id.0 == self.latest
    }

    /// Supersedes every outstanding request without issuing a new one.
    ///
    /// Used on teardown so that in-flight results are never applied.
    pub const fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }
}

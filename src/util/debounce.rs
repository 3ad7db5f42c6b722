//! Debounce primitives: a monotonic sequence token and an injectable clock.
//!
//! Each edit takes a token from a `Sequence`; after sleeping out the window
//! it proceeds only if no later edit has taken a newer token. The same type
//! tags outbound submissions so a slow response can tell it was overtaken.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::time::Duration;

/// Default quiet period before an edit is submitted.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// Monotonically increasing token source. Token `0` is never issued.
#[derive(Debug, Default)]
pub struct Sequence {
    latest: Cell<u64>,
}

impl Sequence {
    /// Issue a new token, superseding every earlier one.
    pub fn next(&self) -> u64 {
        let token = self.latest.get().wrapping_add(1).max(1);
        self.latest.set(token);
        token
    }

    /// Whether `token` is still the most recently issued one.
    pub fn is_latest(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}

/// Async sleep source, injected so the edit pipeline can run without a
/// browser timer.
#[allow(async_fn_in_trait)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// `gloo-timers` clock in the browser; returns immediately elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }
}

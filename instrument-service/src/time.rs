//! Monotonic time capability
//!
//! Services never read the time driver directly. They are handed a [`Clock`] so that their state machines
//! can be driven from a test clock on the host.

use embassy_time::{Duration, Instant};

/// Source of monotonic time
pub trait Clock {
    /// Returns the current time
    fn now(&self) -> Instant;

    /// Time elapsed since `earlier`, zero if `earlier` lies in the future
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// Clock backed by the platform embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

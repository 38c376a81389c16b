use core::cell::Cell;

use embassy_time::{Duration, Instant};
use instrument_services::Clock;

/// Manually advanced clock
pub(crate) struct TestClock {
    now: Cell<Instant>,
}

impl TestClock {
    pub(crate) fn new() -> Self {
        Self {
            now: Cell::new(Instant::from_ticks(0)),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

//! Switch status published to other execution contexts
//!
//! A [`DebouncedInput`](crate::DebouncedInput) is owned and sampled by a single context. Other tasks, or the
//! other core, only ever see [`SwitchStatus`] snapshots through a [`SharedStatus`]. Snapshots may be one poll
//! period stale.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use embassy_time::{Duration, Instant};

/// Snapshot of a debounced switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchStatus {
    /// Switch is pressed
    pub active: bool,
    /// Number of presses seen so far
    pub cycle_index: u32,
    /// Duration of the last completed press
    pub last_active_duration: Duration,
    /// When the current state began
    pub state_since: Instant,
}

impl SwitchStatus {
    /// Status of a switch that has never been pressed, released since `now`
    pub const fn released(now: Instant) -> Self {
        Self {
            active: false,
            cycle_index: 0,
            last_active_duration: Duration::from_ticks(0),
            state_since: now,
        }
    }

    /// Time spent in the current state as of `now`
    pub fn state_duration(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.state_since)
    }
}

impl Default for SwitchStatus {
    fn default() -> Self {
        Self::released(Instant::from_ticks(0))
    }
}

/// Single-writer status cell readable from any context
pub struct SharedStatus {
    inner: Mutex<CriticalSectionRawMutex, Cell<SwitchStatus>>,
}

impl SharedStatus {
    /// Create a new status cell, usable in a static
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(SwitchStatus::released(Instant::from_ticks(0)))),
        }
    }

    /// Replace the published snapshot
    pub fn publish(&self, status: SwitchStatus) {
        self.inner.lock(|cell| cell.set(status));
    }

    /// Latest published snapshot
    pub fn get(&self) -> SwitchStatus {
        self.inner.lock(|cell| cell.get())
    }
}

impl Default for SharedStatus {
    fn default() -> Self {
        Self::new()
    }
}

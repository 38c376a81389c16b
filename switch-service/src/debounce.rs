//! Debounce Module
//!
//! Debouncing uses a saturating integrator rather than a blanking timer. Each read of the line moves the
//! integrator one step towards `threshold` when the switch reads as pressed and one step towards zero
//! otherwise. The debounced state only changes when the integrator sits at one of its two limits, so the
//! state never flickers while the line is bouncing.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;
use instrument_services::{debug, trace, Clock, SystemClock};

use crate::config::{Polarity, SwitchConfig};
use crate::status::SwitchStatus;
use crate::Error;

/// A debounced binary input on top of a raw GPIO line
#[derive(Debug)]
pub struct DebouncedInput<I, C = SystemClock> {
    line: I,
    clock: C,
    config: SwitchConfig,
    /// Consecutive same-direction samples, within `0..=threshold`
    integrator: u8,
    last_sample: Instant,
    active: bool,
    state_since: Instant,
    cycle_index: u32,
    last_active_duration: Duration,
}

impl<I: InputPin> DebouncedInput<I, SystemClock> {
    /// Creates a new debounced input timed by the system clock.
    pub fn new(line: I, config: SwitchConfig) -> Self {
        Self::with_clock(line, config, SystemClock)
    }

    /// Creates a new debounced input from individual settings, see [`SwitchConfig::new`].
    pub fn create(line: I, polarity: Polarity, threshold: u8, sample_interval: Duration) -> Result<Self, Error> {
        Ok(Self::new(line, SwitchConfig::new(polarity, threshold, sample_interval)?))
    }
}

impl<I: InputPin, C: Clock> DebouncedInput<I, C> {
    /// Creates a new debounced input timed by `clock`.
    ///
    /// The line must already be configured as an input, including any pull resistor matching the polarity.
    pub fn with_clock(line: I, config: SwitchConfig, clock: C) -> Self {
        let now = clock.now();

        Self {
            line,
            clock,
            config,
            integrator: 0,
            last_sample: now,
            active: false,
            state_since: now,
            cycle_index: 0,
            last_active_duration: Duration::from_ticks(0),
        }
    }

    /// Samples the line and updates the debounced state.
    ///
    /// Meant to be called on every iteration of the poll loop. The line is read at most once per sample
    /// interval, calls in between only re-run the transition check. Returns true if the debounced state
    /// changed on this call.
    pub fn sample(&mut self) -> bool {
        let now = self.clock.now();

        if now.saturating_duration_since(self.last_sample) >= self.config.sample_interval() {
            self.last_sample = now;

            if self.read_active() {
                if self.integrator < self.config.threshold() {
                    self.integrator += 1;
                }
            } else if self.integrator > 0 {
                self.integrator -= 1;
            }

            trace!("Switch sampled, integrator {}", self.integrator);
        }

        self.check_transition(now)
    }

    /// Returns true while the switch is pressed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Time spent in the current state, computed on every call.
    pub fn current_state_duration(&self) -> Duration {
        self.clock.elapsed_since(self.state_since)
    }

    /// Time spent in the current state in whole milliseconds.
    pub fn current_state_duration_millis(&self) -> u64 {
        self.current_state_duration().as_millis()
    }

    /// Number of presses seen so far. Zero means the switch was never pressed.
    pub fn cycle_index(&self) -> u32 {
        self.cycle_index
    }

    /// Duration of the last completed press. Zero until the first release.
    pub fn last_active_duration(&self) -> Duration {
        self.last_active_duration
    }

    /// Duration of the last completed press in whole milliseconds.
    pub fn last_active_duration_millis(&self) -> u64 {
        self.last_active_duration.as_millis()
    }

    /// Returns the switch configuration.
    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Snapshot of the debounced state for readers outside the sampling context.
    pub fn status(&self) -> SwitchStatus {
        SwitchStatus {
            active: self.active,
            cycle_index: self.cycle_index,
            last_active_duration: self.last_active_duration,
            state_since: self.state_since,
        }
    }

    /// Consumes the input and hands back the line.
    pub fn release(self) -> I {
        self.line
    }

    fn read_active(&mut self) -> bool {
        // A failed read counts as released
        match self.config.polarity() {
            Polarity::ActiveLow => self.line.is_low().unwrap_or(false),
            Polarity::ActiveHigh | Polarity::None => self.line.is_high().unwrap_or(false),
        }
    }

    fn check_transition(&mut self, now: Instant) -> bool {
        let threshold = self.config.threshold();
        if self.integrator != 0 && self.integrator != threshold {
            return false;
        }

        let active = self.integrator == threshold;
        if active == self.active {
            return false;
        }

        if active {
            self.cycle_index = self.cycle_index.saturating_add(1);
            debug!("Switch pressed, cycle {}", self.cycle_index);
        } else {
            self.last_active_duration = now.saturating_duration_since(self.state_since);
            debug!(
                "Switch released, cycle {} held {}ms",
                self.cycle_index,
                self.last_active_duration.as_millis()
            );
        }

        self.active = active;
        self.state_since = now;
        true
    }
}

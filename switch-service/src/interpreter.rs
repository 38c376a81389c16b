//! Press Interpreter Module
//!
//! Classifies presses of a debounced switch from its published [`SwitchStatus`].

use embassy_time::{Duration, Instant};
use instrument_services::debug;

use crate::status::SwitchStatus;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing the different kinds of presses reported by the interpreter.
pub enum Message {
    /// Switch released before the long press threshold.
    ShortPress,
    /// Switch released after the long press threshold.
    LongPress,
    /// Switch still held past the hold threshold.
    PressAndHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Struct representing the press duration thresholds.
pub struct InterpreterConfig {
    long_press_threshold: Duration,
    hold_threshold: Duration,
}

impl InterpreterConfig {
    /// Creates a new InterpreterConfig, `hold_threshold` may not be shorter than `long_press_threshold`.
    pub fn new(long_press_threshold: Duration, hold_threshold: Duration) -> Result<Self, Error> {
        if hold_threshold < long_press_threshold {
            return Err(Error::InvalidInterpreterConfig);
        }

        Ok(Self {
            long_press_threshold,
            hold_threshold,
        })
    }

    /// Gets the long press threshold duration.
    pub fn long_press_threshold(&self) -> Duration {
        self.long_press_threshold
    }

    /// Gets the hold threshold duration.
    pub fn hold_threshold(&self) -> Duration {
        self.hold_threshold
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            long_press_threshold: Duration::from_millis(2000),
            hold_threshold: Duration::from_millis(5000),
        }
    }
}

/// Turns switch snapshots into press messages, at most one per press plus one hold message.
#[derive(Debug)]
pub struct PressInterpreter {
    config: InterpreterConfig,
    reported_cycle: u32,
    held_cycle: Option<u32>,
}

impl PressInterpreter {
    /// Creates a new interpreter. The first update reports the most recent completed press, if any.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            reported_cycle: 0,
            held_cycle: None,
        }
    }

    /// Returns the interpreter configuration.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Checks a snapshot taken at `now` and returns a message for a newly completed or held press.
    ///
    /// Presses that start and end between two updates collapse into the latest one. A press that ended just
    /// before the next one was debounced is still reported, from the next press's snapshot.
    pub fn update(&mut self, status: &SwitchStatus, now: Instant) -> Option<Message> {
        if status.active {
            // The previous press ended between updates, its duration is still in the snapshot
            let previous = status.cycle_index.saturating_sub(1);
            if previous > self.reported_cycle {
                return self.report_completed(previous, status.last_active_duration);
            }

            if self.held_cycle != Some(status.cycle_index)
                && status.state_duration(now) >= self.config.hold_threshold
            {
                self.held_cycle = Some(status.cycle_index);
                debug!("Press {} held", status.cycle_index);
                return Some(Message::PressAndHold);
            }

            return None;
        }

        if status.cycle_index == self.reported_cycle {
            return None;
        }

        self.report_completed(status.cycle_index, status.last_active_duration)
    }

    fn report_completed(&mut self, cycle_index: u32, duration: Duration) -> Option<Message> {
        self.reported_cycle = cycle_index;

        // Already reported as held
        if self.held_cycle == Some(cycle_index) {
            return None;
        }

        if duration >= self.config.long_press_threshold {
            debug!("Press {} long", cycle_index);
            Some(Message::LongPress)
        } else {
            debug!("Press {} short", cycle_index);
            Some(Message::ShortPress)
        }
    }
}

impl Default for PressInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

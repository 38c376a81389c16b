//! Debounced switch service
//!
//! Turns a noisy, rapidly sampled digital line into a stable pressed/released state with edge counting and
//! press duration tracking. One [`DebouncedInput`] is created per physical switch and sampled from the
//! firmware poll loop, see [`task::poll`].

#![no_std]
#![warn(missing_docs)]

pub mod config;
pub mod debounce;
pub mod interpreter;
pub mod status;
pub mod task;

#[cfg(test)]
mod testing;

pub use config::{Polarity, SwitchConfig};
pub use debounce::DebouncedInput;
pub use status::{SharedStatus, SwitchStatus};

/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Hysteresis threshold must be at least one sample
    InvalidThreshold,
    /// Hold threshold is shorter than the long press threshold
    InvalidInterpreterConfig,
}

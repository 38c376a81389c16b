//! Instrument Services Interface Exports

#![no_std]
#![warn(missing_docs)]

pub mod fmt;
pub mod time;

pub use time::{Clock, SystemClock};

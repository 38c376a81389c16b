//! Platform services
//!
//! Hardware setup that runs once before the instrument services start.

#![no_std]
#![warn(missing_docs)]

/// Platform initialization run before services start
pub mod init;

#[cfg(feature = "cortex-m")]
mod arm;

#[cfg(feature = "cortex-m")]
pub(crate) use arm::*;

#[cfg(not(feature = "cortex-m"))]
pub(crate) mod defaults;

#[cfg(not(feature = "cortex-m"))]
pub(crate) use defaults::*;

//! API for one-shot platform setup
//!
//! Register tweaks that the firmware needs exactly once, before the poll loops and the second core start.
//! Nothing here carries state that services depend on.

use embassy_sync::once_lock::OnceLock;
use instrument_services::{info, warn};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Run platform initialization, returns false if it already ran.
///
/// On Cortex-M this sets SEVONPEND so that pending interrupts wake `WFE` even while they are disabled.
pub fn init() -> bool {
    let mut ran = false;
    INITIALIZED.get_or_init(|| {
        crate::enable_wake_on_pending();
        ran = true;
    });

    if ran {
        info!("Platform initialized");
    } else {
        warn!("Platform already initialized");
    }

    ran
}

/// Returns true once [`init`] has run.
pub fn is_initialized() -> bool {
    INITIALIZED.try_get().is_some()
}

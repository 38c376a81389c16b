use cortex_m::peripheral::SCB;

/// SEVONPEND bit of the System Control Register
const SCR_SEVONPEND: u32 = 1 << 4;

pub(crate) fn enable_wake_on_pending() {
    // SAFETY: single read-modify-write of SCR, only run once from init
    unsafe { (*SCB::PTR).scr.modify(|scr| scr | SCR_SEVONPEND) };
}

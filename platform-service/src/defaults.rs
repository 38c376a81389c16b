use instrument_services::debug;

pub(crate) fn enable_wake_on_pending() {
    // no WFE on the host
    debug!("Wake on pending interrupt not supported, skipping");
}

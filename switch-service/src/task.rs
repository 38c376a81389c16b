//! Switch polling task

use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;
use instrument_services::{info, Clock};

use crate::debounce::DebouncedInput;
use crate::status::SharedStatus;

/// Sample once and publish the snapshot if the debounced state changed
pub fn sample_and_publish<I: InputPin, C: Clock>(input: &mut DebouncedInput<I, C>, status: &SharedStatus) -> bool {
    let changed = input.sample();
    if changed {
        status.publish(input.status());
    }

    changed
}

/// Drive `input` forever, sampling every `period` and publishing state changes to `status`.
///
/// `period` should not exceed the configured sample interval, the input throttles its own reads.
pub async fn poll<I: InputPin, C: Clock>(input: &mut DebouncedInput<I, C>, period: Duration, status: &SharedStatus) -> ! {
    info!(
        "Starting switch poll, period {}us, sample interval {}us",
        period.as_micros(),
        input.config().sample_interval().as_micros()
    );

    status.publish(input.status());

    let mut ticker = Ticker::every(period);
    loop {
        sample_and_publish(input, status);
        ticker.next().await;
    }
}

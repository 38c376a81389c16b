use core::convert::Infallible;

use embassy_executor::Executor;
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::{ErrorType, InputPin};
use log::*;
use static_cell::StaticCell;
use switch_service::interpreter::{Message, PressInterpreter};
use switch_service::{task, DebouncedInput, SharedStatus, SwitchConfig};

/// Contact bounce after each edge
const BOUNCE: Duration = Duration::from_millis(15);

/// (start, end) of each press in milliseconds since start-up
const PRESSES: [(u64, u64); 3] = [(300, 700), (1200, 3700), (4000, 10000)];

/// Active low switch that replays `PRESSES`, toggling every 2ms for a while after each edge
struct BouncingSwitch {
    start: Instant,
}

impl BouncingSwitch {
    fn new() -> Self {
        Self { start: Instant::now() }
    }

    fn pressed(&self) -> bool {
        let t = self.start.elapsed().as_millis();

        for (down, up) in PRESSES {
            for edge in [down, up] {
                if (edge..edge + BOUNCE.as_millis()).contains(&t) {
                    return (t / 2) % 2 == 0;
                }
            }

            if (down..up).contains(&t) {
                return true;
            }
        }

        false
    }
}

impl ErrorType for BouncingSwitch {
    type Error = Infallible;
}

impl InputPin for BouncingSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed())
    }
}

static STATUS: SharedStatus = SharedStatus::new();

#[embassy_executor::task]
async fn switch_task() {
    info!("Switch task started");

    let mut input = DebouncedInput::new(BouncingSwitch::new(), SwitchConfig::default());
    task::poll(&mut input, Duration::from_millis(1), &STATUS).await
}

#[embassy_executor::task]
async fn interpreter_task() {
    let mut interpreter = PressInterpreter::default();
    let mut ticker = Ticker::every(Duration::from_millis(20));
    let mut last = STATUS.get();

    loop {
        let now = Instant::now();
        let status = STATUS.get();

        if status.active != last.active {
            info!(
                "Switch {}, cycle {}",
                if status.active { "pressed" } else { "released" },
                status.cycle_index
            );
        }
        last = status;

        match interpreter.update(&status, now) {
            Some(Message::ShortPress) => info!("Short press ({}ms)", status.last_active_duration.as_millis()),
            Some(Message::LongPress) => info!("Long press ({}ms)", status.last_active_duration.as_millis()),
            Some(Message::PressAndHold) => info!("Press and hold ({}ms so far)", status.state_duration(now).as_millis()),
            None => {}
        }

        ticker.next().await;
    }
}

fn main() {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    platform_service::init::init();

    static EXECUTOR: StaticCell<Executor> = StaticCell::new();
    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(switch_task());
        spawner.must_spawn(interpreter_task());
    });
}

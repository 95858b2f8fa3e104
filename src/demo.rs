//! Fixed demonstration sequence exercising every effect

use embassy_time::Duration;

use crate::color::Rgb;
use crate::output::OutputDriver;
use crate::pacer::Pacer;
use crate::runner::{EffectError, EffectRunner};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
const DIM_WHITE: Rgb = Rgb {
    r: 127,
    g: 127,
    b: 127,
};
const PURPLE: Rgb = Rgb {
    r: 255,
    g: 0,
    b: 255,
};
const CYAN: Rgb = Rgb {
    r: 0,
    g: 255,
    b: 255,
};

const WIPE_WAIT: Duration = Duration::from_millis(50);
const WIPE_PAUSE: Duration = Duration::from_millis(500);
const RAINBOW_WAIT: Duration = Duration::from_millis(10);
const RAINBOW_ITERATIONS: usize = 2;
const CHASE_WAIT: Duration = Duration::from_millis(100);
const CHASE_ITERATIONS: usize = 10;
const PULSE_WAIT: Duration = Duration::from_millis(20);
const PULSE_STEPS: u16 = 50;
const PULSE_REPEATS: usize = 2;
const SPINNER_WAIT: Duration = Duration::from_millis(100);
const SPINNER_ITERATIONS: usize = 20;

/// Run every effect once, then turn the ring off
///
/// The ring is cleared on every exit path, including interrupts and driver
/// errors.
pub fn run_demo<O: OutputDriver, P: Pacer, const N: usize>(
    runner: &mut EffectRunner<O, P, N>,
) -> Result<(), EffectError<O::Error>> {
    let mut ring = runner.clear_on_drop();
    log::info!("Starting ring demo");

    for (name, color) in [("Red", RED), ("Green", GREEN), ("Blue", BLUE)] {
        log::info!("Color wipe - {}", name);
        ring.color_wipe(color, WIPE_WAIT)?;
        ring.pause(WIPE_PAUSE)?;
    }

    log::info!("Rainbow cycle");
    ring.rainbow_cycle(RAINBOW_WAIT, RAINBOW_ITERATIONS)?;

    log::info!("Theater chase - White");
    ring.theater_chase(DIM_WHITE, CHASE_WAIT, CHASE_ITERATIONS)?;

    log::info!("Pulse - Purple");
    for _ in 0..PULSE_REPEATS {
        ring.pulse(PURPLE, PULSE_WAIT, PULSE_STEPS)?;
    }

    log::info!("Spinner - Cyan");
    ring.spinner(CYAN, SPINNER_WAIT, SPINNER_ITERATIONS)?;

    log::info!("Demo complete");
    Ok(())
}

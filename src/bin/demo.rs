//! Runs every ring effect once, then turns the ring off
//!
//! Needs root for GPIO memory access. Ctrl-C stops the current effect and
//! clears the ring before exiting.

use std::sync::Arc;

use anyhow::Context;
use log::info;

use myrtio_light_ring::{
    Brightness, EffectError, EffectRunner, LED_COUNT, RING, StopSignal, ThreadPacer,
    Ws281xDriver, run_demo,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stop = Arc::new(StopSignal::new());
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.trigger())
        .context("failed to install the interrupt handler")?;

    info!(
        "{} LEDs on GPIO {} ({}, {} channels{}, brightness {:.2})",
        RING.led_count,
        RING.gpio_pin,
        RING.order.as_str(),
        RING.order.channels(),
        if RING.order.has_white() { ", white unused" } else { "" },
        RING.brightness
    );
    let driver = Ws281xDriver::new(&RING)
        .context("failed to initialize the LED driver (is the program running as root?)")?;
    let mut runner = EffectRunner::<_, _, LED_COUNT>::new(
        driver,
        ThreadPacer::new(stop),
        Brightness::from_unit(RING.brightness),
    );

    match run_demo(&mut runner) {
        Ok(()) => {}
        Err(EffectError::Interrupted) => info!("Demo interrupted"),
        Err(err) => return Err(err).context("demo aborted"),
    }
    info!("Cleared all pixels");
    Ok(())
}

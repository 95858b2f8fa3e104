//! Raspberry Pi output through the `rpi_ws281x` driver
//!
//! Signal generation (PWM + DMA) is done entirely by the vendor library. It
//! needs root for `/dev/mem` access.

use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType, WS2811Error};

use super::{Brightness, ChannelOrder, OutputDriver};
use crate::color::Rgb;
use crate::config::RingConfig;

/// The ring is always wired to the first PWM channel
const CHANNEL: usize = 0;

/// `rpi_ws281x` backed LED driver
pub struct Ws281xDriver {
    controller: Controller,
}

impl Ws281xDriver {
    /// Initialize the vendor driver for the configured ring
    ///
    /// Fails if the process lacks the privileges for GPIO memory access or
    /// the pin cannot be used for PWM output.
    pub fn new(config: &RingConfig) -> Result<Self, WS2811Error> {
        let count = i32::try_from(config.led_count).unwrap_or(i32::MAX);
        let controller = ControllerBuilder::new()
            .freq(config.frequency_hz)
            .dma(config.dma_channel)
            .channel(
                CHANNEL,
                ChannelBuilder::new()
                    .pin(config.gpio_pin)
                    .count(count)
                    .strip_type(strip_type(config.order))
                    .brightness(Brightness::from_unit(config.brightness).raw())
                    .build(),
            )
            .build()?;

        Ok(Self { controller })
    }
}

impl OutputDriver for Ws281xDriver {
    type Error = WS2811Error;

    fn write(&mut self, colors: &[Rgb], brightness: Brightness) -> Result<(), Self::Error> {
        self.controller.set_brightness(CHANNEL, brightness.raw());
        // Raw colors are little-endian 0xWWRRGGBB, the driver reorders per strip type
        for (led, color) in self.controller.leds_mut(CHANNEL).iter_mut().zip(colors) {
            *led = [color.b, color.g, color.r, 0];
        }
        self.controller.render()
    }
}

const fn strip_type(order: ChannelOrder) -> StripType {
    match order {
        ChannelOrder::Rgb => StripType::Ws2811Rgb,
        ChannelOrder::Grb => StripType::Ws2811Grb,
        ChannelOrder::Rgbw => StripType::Sk6812Rgbw,
        ChannelOrder::Grbw => StripType::Sk6812Grbw,
    }
}

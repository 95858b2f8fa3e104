//! Hardware constants for the ring
//!
//! Edit these to match the wiring; nothing here is read at runtime.

use crate::output::ChannelOrder;

/// Number of LEDs in the ring
pub const LED_COUNT: usize = 12;

pub struct RingConfig {
    /// BCM GPIO number of the data line (must be PWM capable)
    pub gpio_pin: i32,
    pub led_count: usize,
    /// Global brightness, 0.0-1.0
    pub brightness: f32,
    pub order: ChannelOrder,
    pub frequency_hz: u32,
    pub dma_channel: i32,
}

/// GPIO 18 (physical pin 12), `NeoPixel` ring
pub const RING: RingConfig = RingConfig {
    gpio_pin: 18,
    led_count: LED_COUNT,
    brightness: 0.3,
    order: ChannelOrder::Grb,
    frequency_hz: 800_000,
    dma_channel: 10,
};

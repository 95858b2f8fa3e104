const ORDER_NAME_RGB: &str = "RGB";
const ORDER_NAME_GRB: &str = "GRB";
const ORDER_NAME_RGBW: &str = "RGBW";
const ORDER_NAME_GRBW: &str = "GRBW";

/// Byte order expected by the LED hardware
///
/// Fixed by the wiring of the ring, never detected at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    /// WS2812 / `NeoPixel` default
    Grb,
    Rgbw,
    /// SK6812 RGBW rings
    Grbw,
}

impl ChannelOrder {
    /// Number of channels sent per pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb | Self::Grb => 3,
            Self::Rgbw | Self::Grbw => 4,
        }
    }

    /// Returns true if the hardware has a white channel
    ///
    /// The white channel is always transmitted as zero.
    pub const fn has_white(self) -> bool {
        self.channels() == 4
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => ORDER_NAME_RGB,
            Self::Grb => ORDER_NAME_GRB,
            Self::Rgbw => ORDER_NAME_RGBW,
            Self::Grbw => ORDER_NAME_GRBW,
        }
    }
}

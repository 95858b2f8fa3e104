//! Hardware output: the driver seam, global brightness and channel order

mod order;
mod writer;
#[cfg(feature = "rpi")]
mod ws281x;

use core::fmt::Debug;

pub use order::ChannelOrder;
pub use writer::SmartLedsDriver;
#[cfg(feature = "rpi")]
pub use ws281x::Ws281xDriver;

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. The driver
/// receives the full frame and applies `brightness` at transmission time.
pub trait OutputDriver {
    type Error: Debug;

    /// Write colors to the LED ring
    fn write(&mut self, colors: &[Rgb], brightness: Brightness) -> Result<(), Self::Error>;
}

/// Global brightness scalar (0-255 = 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brightness(u8);

impl Brightness {
    pub const OFF: Self = Self(0);
    pub const FULL: Self = Self(255);

    /// Use a raw 0-255 level as is
    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Convert a unit scalar to brightness
    ///
    /// Values outside 0.0-1.0 are clamped, NaN is treated as off.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unit(value: f32) -> Self {
        if value.is_nan() {
            return Self::OFF;
        }
        let value = value.clamp(0.0, 1.0);
        Self(libm::roundf(value * 255.0) as u8)
    }

    /// Raw 0-255 level, as passed to the drivers
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Level as a unit scalar, 0.0-1.0
    pub fn as_unit(self) -> f32 {
        f32::from(self.0) / 255.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

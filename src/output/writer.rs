//! Adapter for any [`SmartLedsWrite`] implementation
//!
//! Lets the runner drive rings through the `smart-leds` driver ecosystem
//! (SPI, bit-banged GPIO, ...). Brightness is applied in software before the
//! frame reaches the writer.

use smart_leds::{SmartLedsWrite, brightness};

use super::{Brightness, OutputDriver};
use crate::color::Rgb;

/// Output driver backed by a `smart-leds` writer
#[derive(Debug)]
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the wrapped writer
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: core::fmt::Debug,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb], level: Brightness) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(colors.iter().copied(), level.raw()))
    }
}

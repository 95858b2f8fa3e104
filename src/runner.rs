use core::ops::{Deref, DerefMut};

use embassy_time::Duration;
use thiserror::Error;

use crate::color::{BLACK, Rgb, scale_color};
use crate::effect::{
    RAINBOW_CYCLE_FRAMES, THEATER_CHASE_SPACING, pulse_levels, render_rainbow, render_spinner,
    render_theater_chase,
};
use crate::output::{Brightness, OutputDriver};
use crate::pacer::{Interrupted, Pacer};

/// Errors produced while running an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EffectError<E> {
    /// The output driver failed to flush a frame
    #[error("output driver failed: {0:?}")]
    Output(E),
    /// The pacer observed a stop request
    #[error("interrupted")]
    Interrupted,
    /// A single-pixel write addressed a pixel past the end of the ring
    #[error("pixel {index} is out of range for a ring of {count}")]
    PixelOutOfRange { index: usize, count: usize },
}

impl<E> EffectError<E> {
    /// Returns true if the effect stopped because of an interrupt
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl<E> From<Interrupted> for EffectError<E> {
    fn from(_: Interrupted) -> Self {
        Self::Interrupted
    }
}

/// Effect runner - owns the pixel buffer and pushes frames to the driver
///
/// `N` is the number of LEDs in the ring. The buffer is allocated once and
/// never resized.
pub struct EffectRunner<O: OutputDriver, P: Pacer, const N: usize> {
    // External dependencies
    output: O,
    pacer: P,

    // Internal state
    pixels: [Rgb; N],
    brightness: Brightness,
}

impl<O: OutputDriver, P: Pacer, const N: usize> EffectRunner<O, P, N> {
    /// Create a new runner with all pixels off
    ///
    /// Nothing is written to the driver until the first flush.
    pub fn new(output: O, pacer: P, brightness: Brightness) -> Self {
        Self {
            output,
            pacer,
            pixels: [BLACK; N],
            brightness,
        }
    }

    /// Current contents of the pixel buffer
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Global brightness handed to the driver on every flush
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Get a reference to the output driver
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the pacer
    pub const fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Wrap the runner in a guard that clears the ring when dropped
    pub fn clear_on_drop(&mut self) -> ClearOnDrop<'_, O, P, N> {
        ClearOnDrop { runner: self }
    }

    /// Transmit the buffer to the LEDs
    pub fn show(&mut self) -> Result<(), EffectError<O::Error>> {
        self.output
            .write(&self.pixels, self.brightness)
            .map_err(EffectError::Output)
    }

    /// Turn every pixel off and flush once
    ///
    /// Never waits, so it also succeeds after an interrupt.
    pub fn clear(&mut self) -> Result<(), EffectError<O::Error>> {
        self.fill(BLACK)
    }

    /// Set every pixel to `color` and flush once
    pub fn fill(&mut self, color: Rgb) -> Result<(), EffectError<O::Error>> {
        self.pixels.fill(color);
        self.show()
    }

    /// Set a single pixel and flush
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), EffectError<O::Error>> {
        let Some(pixel) = self.pixels.get_mut(index) else {
            return Err(EffectError::PixelOutOfRange { index, count: N });
        };
        *pixel = color;
        self.show()
    }

    /// Change the global brightness and flush the current buffer with it
    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<(), EffectError<O::Error>> {
        self.brightness = brightness;
        self.show()
    }

    /// Light pixels one at a time, flushing and waiting after each
    pub fn color_wipe(&mut self, color: Rgb, wait: Duration) -> Result<(), EffectError<O::Error>> {
        log::debug!("color wipe {:?}, {}ms per pixel", color, wait.as_millis());
        for index in 0..N {
            self.pixels[index] = color;
            self.frame(wait)?;
        }
        Ok(())
    }

    /// Rotate the color wheel around the ring, 256 frames per iteration
    pub fn rainbow_cycle(
        &mut self,
        wait: Duration,
        iterations: usize,
    ) -> Result<(), EffectError<O::Error>> {
        log::debug!("rainbow cycle x{}, {}ms per frame", iterations, wait.as_millis());
        for _ in 0..iterations {
            for frame in 0..RAINBOW_CYCLE_FRAMES {
                render_rainbow(&mut self.pixels, frame);
                self.frame(wait)?;
            }
        }
        Ok(())
    }

    /// Marquee: every third pixel lit, stepping the offset once per frame
    ///
    /// The buffer keeps the last frame shown.
    pub fn theater_chase(
        &mut self,
        color: Rgb,
        wait: Duration,
        iterations: usize,
    ) -> Result<(), EffectError<O::Error>> {
        log::debug!("theater chase {:?} x{}", color, iterations);
        for _ in 0..iterations {
            for offset in 0..THEATER_CHASE_SPACING {
                render_theater_chase(&mut self.pixels, offset, color);
                self.frame(wait)?;
            }
        }
        Ok(())
    }

    /// Fade the whole ring in to `color` over `steps` levels and back out
    pub fn pulse(
        &mut self,
        color: Rgb,
        wait: Duration,
        steps: u16,
    ) -> Result<(), EffectError<O::Error>> {
        log::debug!("pulse {:?} over {} steps", color, steps);
        for level in pulse_levels(steps) {
            self.pixels.fill(scale_color(color, level, steps));
            self.frame(wait)?;
        }
        Ok(())
    }

    /// Move a single lit pixel around the ring `iterations` times
    pub fn spinner(
        &mut self,
        color: Rgb,
        wait: Duration,
        iterations: usize,
    ) -> Result<(), EffectError<O::Error>> {
        log::debug!("spinner {:?} x{}", color, iterations);
        for _ in 0..iterations {
            for position in 0..N {
                render_spinner(&mut self.pixels, position, color);
                self.frame(wait)?;
            }
        }
        Ok(())
    }

    /// Hold the current frame for `duration`
    pub fn pause(&mut self, duration: Duration) -> Result<(), EffectError<O::Error>> {
        self.pacer.wait(duration)?;
        Ok(())
    }

    /// Flush the current buffer, then wait for the next frame
    fn frame(&mut self, wait: Duration) -> Result<(), EffectError<O::Error>> {
        self.show()?;
        self.pause(wait)
    }
}

/// Scoped guard that turns the ring off when it goes out of scope
///
/// Runs on normal return, on error and after an interrupt.
pub struct ClearOnDrop<'a, O: OutputDriver, P: Pacer, const N: usize> {
    runner: &'a mut EffectRunner<O, P, N>,
}

impl<O: OutputDriver, P: Pacer, const N: usize> Deref for ClearOnDrop<'_, O, P, N> {
    type Target = EffectRunner<O, P, N>;

    fn deref(&self) -> &Self::Target {
        self.runner
    }
}

impl<O: OutputDriver, P: Pacer, const N: usize> DerefMut for ClearOnDrop<'_, O, P, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.runner
    }
}

impl<O: OutputDriver, P: Pacer, const N: usize> Drop for ClearOnDrop<'_, O, P, N> {
    fn drop(&mut self) {
        if let Err(err) = self.runner.clear() {
            log::error!("failed to clear the ring: {:?}", err);
        }
    }
}

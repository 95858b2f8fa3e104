use crate::color::{Rgb, wheel};

/// Frames in one full turn of the color wheel
pub const RAINBOW_CYCLE_FRAMES: usize = 256;

/// Render frame `frame` of the rainbow cycle
///
/// The wheel is spread evenly over the ring and rotated by one phase step
/// per frame, so frame `j` and frame `j + 256` are identical.
#[allow(clippy::cast_possible_truncation)]
pub fn render_rainbow(leds: &mut [Rgb], frame: usize) {
    let count = leds.len();
    for (i, led) in leds.iter_mut().enumerate() {
        // i < count, so the spread stays below 256
        let spread = i * RAINBOW_CYCLE_FRAMES / count;
        *led = wheel(((spread + frame) & 0xFF) as u8);
    }
}

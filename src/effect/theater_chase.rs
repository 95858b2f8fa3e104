use crate::color::{BLACK, Rgb};

/// Distance between lit pixels
pub const THEATER_CHASE_SPACING: usize = 3;

/// Render one marquee frame
///
/// Lights every third pixel starting at `offset` and turns everything else
/// off, so at most `ceil(len / 3)` pixels are lit.
pub fn render_theater_chase(leds: &mut [Rgb], offset: usize, color: Rgb) {
    let offset = offset % THEATER_CHASE_SPACING;
    for (i, led) in leds.iter_mut().enumerate() {
        *led = if i % THEATER_CHASE_SPACING == offset {
            color
        } else {
            BLACK
        };
    }
}

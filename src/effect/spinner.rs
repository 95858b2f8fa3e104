use crate::color::{BLACK, Rgb};

/// Render a single lit pixel at `position`, wrapped around the ring
pub fn render_spinner(leds: &mut [Rgb], position: usize, color: Rgb) {
    if leds.is_empty() {
        return;
    }
    leds.fill(BLACK);
    let position = position % leds.len();
    leds[position] = color;
}

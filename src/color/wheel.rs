use crate::color::Rgb;

/// Width of one wheel segment (red→green, green→blue, blue→red)
const SEGMENT: u8 = 85;

/// Map a phase on the 0-255 color wheel to an RGB color
///
/// The wheel walks red → green → blue and back in three segments of 85
/// steps. Neighbouring phases differ by at most 3 per channel, including the
/// wrap from 255 back to 0.
#[inline]
pub const fn wheel(pos: u8) -> Rgb {
    if pos < SEGMENT {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < SEGMENT * 2 {
        let pos = pos - SEGMENT;
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - SEGMENT * 2;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}

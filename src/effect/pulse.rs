//! Pulse brightness ramp
//!
//! A pulse fades in over `steps` levels and back out again. The ramp is
//! symmetric: `0, 1, ..., steps, ..., 1, 0`.

use core::iter::{Chain, Rev};
use core::ops::{Range, RangeInclusive};

/// Brightness levels of one pulse
pub type PulseLevels = Chain<RangeInclusive<u16>, Rev<Range<u16>>>;

/// Iterate the brightness levels of one pulse
///
/// Each level is meant to be used as `level / steps` of the target color.
pub fn pulse_levels(steps: u16) -> PulseLevels {
    (0..=steps).chain((0..steps).rev())
}

/// Number of frames rendered by one pulse
pub const fn pulse_frame_count(steps: u16) -> usize {
    steps as usize * 2 + 1
}

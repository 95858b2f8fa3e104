//! Frame renderers for the ring effects
//!
//! Each renderer writes one frame into a pixel slice and knows nothing about
//! drivers or timing. [`EffectRunner`](crate::EffectRunner) sequences the
//! frames, flushes them and waits between them.

mod pulse;
mod rainbow;
mod spinner;
mod theater_chase;

pub use pulse::{PulseLevels, pulse_frame_count, pulse_levels};
pub use rainbow::{RAINBOW_CYCLE_FRAMES, render_rainbow};
pub use spinner::render_spinner;
pub use theater_chase::{THEATER_CHASE_SPACING, render_theater_chase};

mod preset;
mod utils;
mod wheel;

use smart_leds::RGB8;

pub use preset::ColorPreset;
pub use utils::{is_lit, scale_color};
pub use wheel::wheel;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

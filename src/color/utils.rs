use crate::color::{BLACK, Rgb};

/// Scale every channel of `color` by `level / steps`
///
/// Uses truncating integer math, so `level == steps` returns the color
/// unchanged and `level == 0` returns black. `steps == 0` is treated as off.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_color(color: Rgb, level: u16, steps: u16) -> Rgb {
    if steps == 0 {
        return BLACK;
    }
    let level = if level > steps { steps as u32 } else { level as u32 };
    let steps = steps as u32;
    Rgb {
        r: (color.r as u32 * level / steps) as u8,
        g: (color.g as u32 * level / steps) as u8,
        b: (color.b as u32 * level / steps) as u8,
    }
}

/// Returns true if any channel of the color is on
#[inline]
pub const fn is_lit(color: Rgb) -> bool {
    color.r != 0 || color.g != 0 || color.b != 0
}

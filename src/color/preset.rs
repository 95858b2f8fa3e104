//! Named colors accepted by the manual control `preset` command

use crate::color::Rgb;

const PRESET_NAME_RED: &str = "red";
const PRESET_NAME_GREEN: &str = "green";
const PRESET_NAME_BLUE: &str = "blue";
const PRESET_NAME_WHITE: &str = "white";
const PRESET_NAME_YELLOW: &str = "yellow";
const PRESET_NAME_CYAN: &str = "cyan";
const PRESET_NAME_MAGENTA: &str = "magenta";
const PRESET_NAME_ORANGE: &str = "orange";
const PRESET_NAME_PURPLE: &str = "purple";
const PRESET_NAME_PINK: &str = "pink";
const PRESET_NAME_WARM: &str = "warm";
const PRESET_NAME_COOL: &str = "cool";

/// Known color presets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPreset {
    Red,
    Green,
    Blue,
    White,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
    Pink,
    /// Warm white
    Warm,
    /// Cool white
    Cool,
}

impl ColorPreset {
    /// All presets in display order
    pub const ALL: [Self; 12] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::White,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
        Self::Orange,
        Self::Purple,
        Self::Pink,
        Self::Warm,
        Self::Cool,
    ];

    pub const fn color(self) -> Rgb {
        let (r, g, b) = match self {
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::White => (255, 255, 255),
            Self::Yellow => (255, 255, 0),
            Self::Cyan => (0, 255, 255),
            Self::Magenta => (255, 0, 255),
            Self::Orange => (255, 165, 0),
            Self::Purple => (128, 0, 128),
            Self::Pink => (255, 192, 203),
            Self::Warm => (255, 147, 41),
            Self::Cool => (64, 156, 255),
        };
        Rgb { r, g, b }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => PRESET_NAME_RED,
            Self::Green => PRESET_NAME_GREEN,
            Self::Blue => PRESET_NAME_BLUE,
            Self::White => PRESET_NAME_WHITE,
            Self::Yellow => PRESET_NAME_YELLOW,
            Self::Cyan => PRESET_NAME_CYAN,
            Self::Magenta => PRESET_NAME_MAGENTA,
            Self::Orange => PRESET_NAME_ORANGE,
            Self::Purple => PRESET_NAME_PURPLE,
            Self::Pink => PRESET_NAME_PINK,
            Self::Warm => PRESET_NAME_WARM,
            Self::Cool => PRESET_NAME_COOL,
        }
    }

    /// Parse a preset name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
    }
}

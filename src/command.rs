//! Manual control commands
//!
//! One command per line, words separated by whitespace, command names and
//! preset names are case-insensitive:
//!
//! ```text
//! all <r> <g> <b>          all LEDs to one color (0-255)
//! set <led> <r> <g> <b>    one LED to a color
//! clear                    all LEDs off
//! brightness <0.0-1.0>     global brightness
//! status                   print brightness and LED colors
//! preset <name>            all LEDs to a named color
//! help                     print usage
//! exit | quit              leave
//! ```

use heapless::Vec;
use thiserror::Error;

use crate::color::{ColorPreset, Rgb};
use crate::output::{Brightness, OutputDriver};
use crate::pacer::Pacer;
use crate::runner::{EffectError, EffectRunner};

/// Longest valid command has five words
const MAX_WORDS: usize = 5;

pub const USAGE_ALL: &str = "all <r> <g> <b>";
pub const USAGE_SET: &str = "set <led> <r> <g> <b>";
pub const USAGE_BRIGHTNESS: &str = "brightness <0.0-1.0>";
pub const USAGE_PRESET: &str = "preset <name>";

/// A parsed manual control command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    All(Rgb),
    Set { index: usize, color: Rgb },
    Clear,
    Brightness(Brightness),
    Status,
    Preset(ColorPreset),
    Help,
    Exit,
}

/// Reasons a command line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError<'a> {
    #[error("unknown command: {0}")]
    Unknown(&'a str),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid value: {0}")]
    InvalidValue(&'a str),
    #[error("brightness must be between 0.0 and 1.0")]
    BrightnessOutOfRange,
    #[error("unknown preset: {0}")]
    UnknownPreset(&'a str),
    #[error("too many arguments")]
    TooManyArguments,
}

/// Parse one command line
///
/// Returns `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError<'_>> {
    let mut words: Vec<&str, MAX_WORDS> = Vec::new();
    for word in line.split_whitespace() {
        words
            .push(word)
            .map_err(|_| CommandError::TooManyArguments)?;
    }
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = if name.eq_ignore_ascii_case("exit") || name.eq_ignore_ascii_case("quit") {
        Command::Exit
    } else if name.eq_ignore_ascii_case("help") {
        Command::Help
    } else if name.eq_ignore_ascii_case("clear") {
        Command::Clear
    } else if name.eq_ignore_ascii_case("status") {
        Command::Status
    } else if name.eq_ignore_ascii_case("all") {
        let &[r, g, b] = args else {
            return Err(CommandError::Usage(USAGE_ALL));
        };
        Command::All(parse_color(r, g, b)?)
    } else if name.eq_ignore_ascii_case("set") {
        let &[index, r, g, b] = args else {
            return Err(CommandError::Usage(USAGE_SET));
        };
        Command::Set {
            index: index
                .parse()
                .map_err(|_| CommandError::InvalidValue(index))?,
            color: parse_color(r, g, b)?,
        }
    } else if name.eq_ignore_ascii_case("brightness") {
        let &[level] = args else {
            return Err(CommandError::Usage(USAGE_BRIGHTNESS));
        };
        let level: f32 = level
            .parse()
            .map_err(|_| CommandError::InvalidValue(level))?;
        if !(0.0..=1.0).contains(&level) {
            return Err(CommandError::BrightnessOutOfRange);
        }
        Command::Brightness(Brightness::from_unit(level))
    } else if name.eq_ignore_ascii_case("preset") {
        let &[preset] = args else {
            return Err(CommandError::Usage(USAGE_PRESET));
        };
        Command::Preset(
            ColorPreset::parse_from_str(preset).ok_or(CommandError::UnknownPreset(preset))?,
        )
    } else {
        return Err(CommandError::Unknown(name));
    };

    Ok(Some(command))
}

fn parse_color<'a>(r: &'a str, g: &'a str, b: &'a str) -> Result<Rgb, CommandError<'a>> {
    let channel = |value: &'a str| {
        value
            .parse::<u8>()
            .map_err(|_| CommandError::InvalidValue(value))
    };
    Ok(Rgb {
        r: channel(r)?,
        g: channel(g)?,
        b: channel(b)?,
    })
}

impl Command {
    /// Apply the command to the ring
    ///
    /// `Status`, `Help` and `Exit` only concern the caller and leave the
    /// ring untouched.
    pub fn apply<O: OutputDriver, P: Pacer, const N: usize>(
        self,
        runner: &mut EffectRunner<O, P, N>,
    ) -> Result<(), EffectError<O::Error>> {
        match self {
            Self::All(color) => runner.fill(color),
            Self::Set { index, color } => runner.set_pixel(index, color),
            Self::Clear => runner.clear(),
            Self::Brightness(brightness) => runner.set_brightness(brightness),
            Self::Preset(preset) => runner.fill(preset.color()),
            Self::Status | Self::Help | Self::Exit => Ok(()),
        }
    }
}

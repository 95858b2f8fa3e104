//! Effect runner for a small addressable LED ring
//!
//! Features:
//! - `std`: [`ThreadPacer`], a sleeping pacer that observes a [`StopSignal`].
//!   Its tests only run with `cargo test --features std`.
//! - `rpi`: the `rpi_ws281x` driver and the `myrtio-ring-demo` /
//!   `myrtio-ring-control` programs.

#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod demo;
pub mod effect;
pub mod output;
pub mod pacer;
pub mod runner;

pub use command::{Command, CommandError};
pub use config::{LED_COUNT, RING, RingConfig};
pub use demo::run_demo;
pub use output::{Brightness, ChannelOrder, OutputDriver, SmartLedsDriver};
#[cfg(feature = "rpi")]
pub use output::Ws281xDriver;
#[cfg(feature = "std")]
pub use pacer::ThreadPacer;
pub use pacer::{Interrupted, Pacer, StopSignal};
pub use runner::{ClearOnDrop, EffectError, EffectRunner};

pub use color::{ColorPreset, Rgb};
pub use embassy_time::Duration;

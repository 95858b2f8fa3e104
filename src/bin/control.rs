//! Manual ring control
//!
//! `myrtio-ring-control all 255 0 0` runs one command and leaves the ring as
//! set. Without arguments an interactive prompt runs until `exit`, end of
//! input or Ctrl-C, and the ring is cleared on the way out.
#![allow(clippy::print_stdout)]

use std::io::{self, BufRead, Write};
use std::sync::{Arc, mpsc};
use std::thread;

use anyhow::Context;
use log::info;

use myrtio_light_ring::{
    Brightness, ColorPreset, Command, EffectError, EffectRunner, LED_COUNT, RING, StopSignal,
    ThreadPacer, Ws281xDriver, command,
};

type Ring = EffectRunner<Ws281xDriver, ThreadPacer, LED_COUNT>;

/// Events delivered to the main thread
enum Input {
    Line(String),
    Interrupt,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let driver = Ws281xDriver::new(&RING)
        .context("failed to initialize the LED driver (is the program running as root?)")?;
    let mut ring: Ring = EffectRunner::new(
        driver,
        ThreadPacer::new(Arc::new(StopSignal::new())),
        Brightness::from_unit(RING.brightness),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        interactive(&mut ring)
    } else {
        execute(&mut ring, &args.join(" ")).map(|_| ())
    }
}

fn interactive(ring: &mut Ring) -> anyhow::Result<()> {
    let (sender, inputs) = mpsc::channel();

    let interrupt = sender.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt.send(Input::Interrupt);
    })
    .context("failed to install the interrupt handler")?;

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = sender.send(Input::Closed);
    });

    print_help();
    let mut ring = ring.clear_on_drop();
    loop {
        print!("ring> ");
        io::stdout().flush()?;
        match inputs.recv() {
            Ok(Input::Line(line)) => {
                if execute(&mut ring, &line)? == Flow::Exit {
                    break;
                }
            }
            Ok(Input::Interrupt) => {
                println!();
                info!("Interrupted");
                break;
            }
            Ok(Input::Closed) | Err(_) => {
                println!();
                break;
            }
        }
    }
    drop(ring);
    println!("Goodbye!");
    Ok(())
}

/// Run one command line
///
/// Parse errors and out-of-range pixels are reported and the session goes
/// on. Driver errors are fatal.
fn execute(ring: &mut Ring, line: &str) -> anyhow::Result<Flow> {
    let command = match command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(Flow::Continue),
        Err(err @ command::CommandError::Unknown(_)) => {
            println!("Error: {err}");
            println!("Type 'help' for available commands");
            return Ok(Flow::Continue);
        }
        Err(command::CommandError::UnknownPreset(name)) => {
            println!("Error: unknown preset '{name}'");
            println!("Available presets: {}", preset_names());
            return Ok(Flow::Continue);
        }
        Err(err) => {
            println!("Error: {err}");
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Exit => return Ok(Flow::Exit),
        Command::Help => print_help(),
        Command::Status => print_status(ring),
        command => match command.apply(ring) {
            Ok(()) => report(command),
            Err(err @ EffectError::PixelOutOfRange { .. }) => println!("Error: {err}"),
            Err(err) => return Err(err).context("failed to update the ring"),
        },
    }
    Ok(Flow::Continue)
}

fn report(command: Command) {
    match command {
        Command::All(color) => println!("All LEDs set to RGB({}, {}, {})", color.r, color.g, color.b),
        Command::Set { index, color } => {
            println!("LED {index} set to RGB({}, {}, {})", color.r, color.g, color.b);
        }
        Command::Clear => println!("All LEDs cleared"),
        Command::Brightness(brightness) => {
            println!("Brightness set to {:.2}", brightness.as_unit());
        }
        Command::Preset(preset) => println!("Preset {} loaded", preset.as_str()),
        Command::Status | Command::Help | Command::Exit => {}
    }
}

fn print_status(ring: &Ring) {
    println!();
    println!("--- Ring Status ---");
    println!("Total LEDs: {LED_COUNT}");
    println!("Brightness: {:.2}", ring.brightness().as_unit());
    println!();
    println!("Current LED Colors:");
    for (index, color) in ring.pixels().iter().enumerate() {
        println!("  LED {index:2}: RGB({}, {}, {})", color.r, color.g, color.b);
    }
    println!();
}

fn preset_names() -> String {
    ColorPreset::ALL
        .iter()
        .map(|preset| preset.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help() {
    println!();
    println!("=== Ring Manual Control ===");
    println!("Commands:");
    println!("  {:<24} - Set all LEDs to RGB color (0-255)", command::USAGE_ALL);
    println!("  {:<24} - Set specific LED to RGB color", command::USAGE_SET);
    println!("  {:<24} - Turn off all LEDs", "clear");
    println!("  {:<24} - Set brightness level", command::USAGE_BRIGHTNESS);
    println!("  {:<24} - Show current LED status", "status");
    println!("  {:<24} - Load color preset", command::USAGE_PRESET);
    println!("  {:<24} - Show this help message", "help");
    println!("  {:<24} - Exit program", "exit");
    println!();
    println!("Presets: {}", preset_names());
    println!();
}

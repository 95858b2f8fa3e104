//! Test doubles for the output driver and pacer
#![allow(dead_code)]

use myrtio_light_ring::{Brightness, Duration, Interrupted, OutputDriver, Pacer, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

/// Records every flushed frame instead of driving hardware
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
    pub brightness: Vec<Brightness>,
    /// Fail the write with this index (0-based)
    pub fail_at: Option<usize>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    type Error = WriteFailed;

    fn write(&mut self, colors: &[Rgb], brightness: Brightness) -> Result<(), Self::Error> {
        if self.fail_at == Some(self.frames.len()) {
            self.fail_at = None;
            return Err(WriteFailed);
        }
        self.frames.push(colors.to_vec());
        self.brightness.push(brightness);
        Ok(())
    }
}

/// Records waits without sleeping, optionally interrupting after a number of them
#[derive(Debug, Default)]
pub struct ScriptedPacer {
    pub waits: Vec<Duration>,
    pub interrupt_after: Option<usize>,
}

impl ScriptedPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupting_after(waits: usize) -> Self {
        Self {
            interrupt_after: Some(waits),
            ..Self::default()
        }
    }
}

impl Pacer for ScriptedPacer {
    fn wait(&mut self, duration: Duration) -> Result<(), Interrupted> {
        if self.interrupt_after.is_some_and(|limit| self.waits.len() >= limit) {
            return Err(Interrupted);
        }
        self.waits.push(duration);
        Ok(())
    }
}

pub const RING_SIZE: usize = 12;

pub type TestRunner = myrtio_light_ring::EffectRunner<RecordingDriver, ScriptedPacer, RING_SIZE>;

pub fn runner() -> TestRunner {
    TestRunner::new(RecordingDriver::new(), ScriptedPacer::new(), Brightness::FULL)
}

pub fn lit_count(frame: &[Rgb]) -> usize {
    frame
        .iter()
        .filter(|&&color| myrtio_light_ring::color::is_lit(color))
        .count()
}

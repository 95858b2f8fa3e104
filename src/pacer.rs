//! Frame pacing and cancellation
//!
//! Effects never sleep directly: they ask a [`Pacer`] to wait. The pacer is
//! the only place an interrupt can be observed, so an interrupted effect
//! stops at its next frame boundary.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_time::Duration;
use thiserror::Error;

/// Returned by a pacer once an interrupt was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("interrupted")]
pub struct Interrupted;

/// Source of delays between frames
pub trait Pacer {
    /// Block for `duration`
    ///
    /// Returns [`Interrupted`] instead of completing the wait if the
    /// program has been asked to stop.
    fn wait(&mut self, duration: Duration) -> Result<(), Interrupted>;
}

/// Stop request shared with a signal handler
#[derive(Debug, Default)]
pub struct StopSignal {
    triggered: AtomicBool,
}

impl StopSignal {
    /// Create a signal that has not been triggered
    pub const fn new() -> Self {
        Self {
            triggered: AtomicBool::new(false),
        }
    }

    /// Request a stop. Safe to call from any thread.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
    }

    /// Returns true once [`trigger`](Self::trigger) has been called
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }
}

#[cfg(feature = "std")]
pub use thread::ThreadPacer;

#[cfg(feature = "std")]
mod thread {
    extern crate std;

    use std::sync::Arc;

    use embassy_time::Duration;

    use super::{Interrupted, Pacer, StopSignal};

    /// Longest uninterrupted sleep
    const POLL_INTERVAL: Duration = Duration::from_millis(10);

    /// Pacer backed by `std::thread::sleep`
    ///
    /// Sleeps in short slices and checks the stop signal between them.
    #[derive(Debug, Clone)]
    pub struct ThreadPacer {
        stop: Arc<StopSignal>,
    }

    impl ThreadPacer {
        pub fn new(stop: Arc<StopSignal>) -> Self {
            Self { stop }
        }

        /// Get the stop signal this pacer observes
        pub fn stop_signal(&self) -> &Arc<StopSignal> {
            &self.stop
        }

        fn check(&self) -> Result<(), Interrupted> {
            if self.stop.is_triggered() {
                Err(Interrupted)
            } else {
                Ok(())
            }
        }
    }

    impl Pacer for ThreadPacer {
        fn wait(&mut self, duration: Duration) -> Result<(), Interrupted> {
            self.check()?;
            let mut remaining = duration;
            while remaining > Duration::from_ticks(0) {
                let slice = remaining.min(POLL_INTERVAL);
                std::thread::sleep(std::time::Duration::from_micros(slice.as_micros()));
                remaining -= slice;
                self.check()?;
            }
            Ok(())
        }
    }
}

//! Timed playback of frame sequences.
//!
//! The scheduler only produces data; this adapter owns the clock. Rendering
//! and waiting are injected so the TUI can poll for key presses while a test
//! can record delays without sleeping.

use crate::engine::reveal::Frame;
use std::io;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Interrupted,
}

pub trait Pacer {
    fn wait(&mut self, delay: Duration) -> io::Result<Pace>;
}

/// Blocks the current thread for each delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, delay: Duration) -> io::Result<Pace> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(Pace::Continue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed { frames: usize },
    Cancelled { frames: usize },
}

impl PlaybackOutcome {
    pub fn frames(&self) -> usize {
        match self {
            PlaybackOutcome::Completed { frames } | PlaybackOutcome::Cancelled { frames } => *frames,
        }
    }

    pub fn was_cancelled(&self) -> bool {
        matches!(self, PlaybackOutcome::Cancelled { .. })
    }
}

/// Renders each frame, then waits its delay. Stops after the final frame or
/// when the pacer reports an interruption.
pub fn play<I, P, F>(frames: I, pacer: &mut P, mut render: F) -> io::Result<PlaybackOutcome>
where
    I: IntoIterator<Item = Frame>,
    P: Pacer + ?Sized,
    F: FnMut(&Frame) -> io::Result<()>,
{
    let mut shown = 0;
    for frame in frames {
        render(&frame)?;
        shown += 1;
        if frame.is_final() {
            break;
        }
        if pacer.wait(frame.delay)? == Pace::Interrupted {
            tracing::debug!(frames = shown, "playback interrupted");
            return Ok(PlaybackOutcome::Cancelled { frames: shown });
        }
    }
    Ok(PlaybackOutcome::Completed { frames: shown })
}

// src/loader.rs
//! Scripted loading screen: a fake progress counter that climbs to 100, holds
//! briefly, then hides the overlay exactly once.
//!
//! The loader never reads the clock itself; the caller passes `now` into
//! [`Loader::poll`], so tests can drive the schedule deterministically.

use std::time::{Duration, Instant};

/// Counter tick cadence.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
/// Hold after the counter first reaches 100, before hiding.
pub const HIDE_DELAY: Duration = Duration::from_millis(500);
/// Per-tick increment range: `[MIN_INCREMENT, MAX_INCREMENT)`.
pub const MIN_INCREMENT: u32 = 5;
pub const MAX_INCREMENT: u32 = 20;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Counting { last_tick: Option<Instant> },
    Holding { since: Instant },
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Loader {
    progress: u32,
    phase: Phase,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            progress: 0,
            phase: Phase::Counting { last_tick: None },
        }
    }

    /// Drives the loader from the frame loop. Returns `true` on the single
    /// poll where the overlay transitions to hidden, so the caller can run
    /// dependent layout refreshes once.
    pub fn poll(&mut self, now: Instant, rng: &mut fastrand::Rng) -> bool {
        match self.phase {
            Phase::Counting { last_tick } => {
                let due = last_tick.map_or(true, |t| now.duration_since(t) >= TICK_INTERVAL);
                if due {
                    let completed =
                        self.apply_increment(rng.u32(MIN_INCREMENT..MAX_INCREMENT));
                    self.phase = if completed {
                        Phase::Holding { since: now }
                    } else {
                        Phase::Counting {
                            last_tick: Some(now),
                        }
                    };
                }
                false
            }
            Phase::Holding { since } => {
                if now.duration_since(since) >= HIDE_DELAY {
                    self.phase = Phase::Hidden;
                    true
                } else {
                    false
                }
            }
            Phase::Hidden => false,
        }
    }

    /// Applies one tick's increment, clamping at 100. Returns `true` when the
    /// counter completes on this tick. Progress is non-decreasing by
    /// construction.
    pub fn apply_increment(&mut self, increment: u32) -> bool {
        self.progress = (self.progress + increment).min(100);
        self.progress == 100
    }

    /// Displayed counter value, always in `[0, 100]`.
    #[inline]
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// True while the overlay should still be drawn.
    #[inline]
    pub fn visible(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        matches!(self.phase, Phase::Hidden)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

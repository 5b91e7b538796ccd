// src/reveal.rs
//! Scroll-linked content reveals.
//!
//! A content block fades and slides in once its top edge crosses 85% of the
//! viewport height, and reverses when scrolled back out. The toggle runs both
//! directions; this is not a play-once effect.

use scrubline::{Ease, Tween};

/// Fraction of the viewport height the block top must cross to reveal.
pub const REVEAL_THRESHOLD: f32 = 0.85;
/// Slide-in travel in pixels (hidden blocks sit this far below their slot).
pub const REVEAL_SLIDE_PX: f32 = 50.0;
/// Tween advance per frame (~1 s at 60 Hz).
const REVEAL_RATE: f32 = 1.0 / 60.0;

/// Drawable state of one block for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPose {
    pub opacity: f32,
    pub y_offset: f32,
}

impl RevealPose {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        y_offset: REVEAL_SLIDE_PX,
    };
}

#[derive(Debug, Clone)]
pub struct Reveal {
    tween: Tween,
}

impl Reveal {
    pub fn new() -> Self {
        Self {
            tween: Tween::new(REVEAL_RATE, Ease::QuadOut),
        }
    }

    /// Advances one frame given the block's current top edge in viewport
    /// coordinates (pixels from the viewport top).
    pub fn step(&mut self, block_top: f32, viewport_h: f32) -> RevealPose {
        self.tween.run_to(block_top < viewport_h * REVEAL_THRESHOLD);
        let eased = self.tween.step();
        RevealPose {
            opacity: eased,
            y_offset: (1.0 - eased) * REVEAL_SLIDE_PX,
        }
    }

    /// Current pose without advancing.
    pub fn pose(&self) -> RevealPose {
        let eased = self.tween.value();
        RevealPose {
            opacity: eased,
            y_offset: (1.0 - eased) * REVEAL_SLIDE_PX,
        }
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

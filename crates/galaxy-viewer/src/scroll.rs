// src/scroll.rs
//! Virtual page scroll: stacked sections, one viewport tall each.
//!
//! Owns the scroll offset, the section table used for anchor navigation, and
//! the eased smooth-scroll glide. Normalized progress over the whole page is
//! what the scroll timeline scrubs.

use scrubline::{lerp, Ease, Tween};

/// Eased glide advance per frame (~0.75 s at 60 Hz).
const GLIDE_RATE: f32 = 1.0 / 45.0;

/// Fraction of a section's height from its top to its content block.
pub const BLOCK_MARGIN_FRACTION: f32 = 0.35;

/// An in-page anchor target.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

/// Page layout, top to bottom.
pub const SECTIONS: &[Section] = &[
    Section {
        id: "home",
        title: "A Galaxy",
    },
    Section {
        id: "about",
        title: "About",
    },
    Section {
        id: "projects",
        title: "Projects",
    },
    Section {
        id: "contact",
        title: "Contact",
    },
];

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    target: f32,
    tween: Tween,
}

#[derive(Debug, Clone)]
pub struct ScrollPage {
    offset: f32,
    viewport_h: f32,
    glide: Option<Glide>,
}

impl ScrollPage {
    pub fn new(viewport_h: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_h: viewport_h.max(1.0),
            glide: None,
        }
    }

    /// Recomputes page metrics for a new viewport height and re-clamps the
    /// offset. Idempotent for identical viewports. Called after the loading
    /// overlay hides and on every resize.
    pub fn refresh(&mut self, viewport_h: f32) {
        let old_h = self.viewport_h;
        self.viewport_h = viewport_h.max(1.0);
        // Keep the same page position through the resize.
        if old_h > 0.0 {
            let scale = self.viewport_h / old_h;
            self.offset *= scale;
            if let Some(glide) = &mut self.glide {
                glide.from *= scale;
                glide.target *= scale;
            }
        }
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Scroll span of the whole page.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        (SECTIONS.len().saturating_sub(1)) as f32 * self.viewport_h
    }

    #[inline]
    pub fn viewport_h(&self) -> f32 {
        self.viewport_h
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Normalized scroll progress in [0, 1].
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (self.offset / max).clamp(0.0, 1.0)
        }
    }

    /// Top edge of section `index`'s content block in viewport coordinates
    /// (pixels from the viewport top at the current scroll offset). Reveal
    /// thresholds and drawing both use this.
    pub fn block_top(&self, index: usize) -> f32 {
        (index as f32 + BLOCK_MARGIN_FRACTION) * self.viewport_h - self.offset
    }

    /// Top of a section in page coordinates, if the id is known.
    pub fn section_offset(&self, id: &str) -> Option<f32> {
        SECTIONS
            .iter()
            .position(|s| s.id == id)
            .map(|i| i as f32 * self.viewport_h)
    }

    /// Direct scroll input. Cancels any in-flight glide; latest input wins.
    pub fn scroll_by(&mut self, delta_px: f32) {
        self.glide = None;
        self.offset = (self.offset + delta_px).clamp(0.0, self.max_offset());
    }

    /// Starts an eased glide to the named section. An unknown id is a no-op.
    pub fn scroll_to(&mut self, id: &str) {
        let Some(target) = self.section_offset(id) else {
            return;
        };
        let mut tween = Tween::new(GLIDE_RATE, Ease::QuadInOut);
        tween.run_to(true);
        self.glide = Some(Glide {
            from: self.offset,
            target: target.clamp(0.0, self.max_offset()),
            tween,
        });
    }

    /// Advances the glide one frame, if one is running.
    pub fn step(&mut self) {
        if let Some(glide) = &mut self.glide {
            let eased = glide.tween.step();
            self.offset = lerp(glide.from, glide.target, eased);
            if glide.tween.settled() {
                self.offset = glide.target;
                self.glide = None;
            }
        }
    }

    /// True while a smooth-scroll glide is in flight.
    #[inline]
    pub fn gliding(&self) -> bool {
        self.glide.is_some()
    }
}

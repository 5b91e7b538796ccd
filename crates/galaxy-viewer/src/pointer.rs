// src/pointer.rs
//! Tracks the cursor offset from the viewport center.
//!
//! Capture is raw; smoothing happens in the render loop (`SceneState::step`).

use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Radians of sway target per pixel of cursor offset.
pub const SWAY_SENSITIVITY: f32 = 0.001;

#[derive(Debug, Clone)]
pub struct PointerTracker {
    center: Vec2,
    offset: Vec2,
}

impl PointerTracker {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        let mut tracker = Self {
            center: Vec2::ZERO,
            offset: Vec2::ZERO,
        };
        tracker.set_viewport(size);
        tracker
    }

    /// Recomputes the viewport center after a resize.
    pub fn set_viewport(&mut self, size: PhysicalSize<u32>) {
        self.center = Vec2::new(size.width as f32, size.height as f32) * 0.5;
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.offset = Vec2::new(position.x as f32, position.y as f32) - self.center;
    }

    /// Last-seen offset from the viewport center, in pixels.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sway rotation target: cursor y drives pitch, cursor x drives yaw.
    #[inline]
    pub fn sway_target(&self) -> Vec2 {
        Vec2::new(self.offset.y, self.offset.x) * SWAY_SENSITIVITY
    }
}

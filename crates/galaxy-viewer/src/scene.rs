// src/scene.rs
//! Per-session scene-graph state: the transforms that sit between the camera
//! and the particle buffer.
//!
//! Three nested rotations, mirroring master group → galaxy group → mesh:
//! - `sway` follows the pointer target with a first-order low-pass filter.
//! - `group_rotation` is written by the scroll timeline (identity without it).
//! - `spin` is the mesh's constant autonomous rotation.

use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Fraction of the remaining gap the sway closes per frame.
pub const SWAY_EASE: f32 = 0.05;
/// Autonomous mesh spin per frame (radians).
pub const SPIN_STEP: f32 = 0.002;

#[derive(Debug, Clone)]
pub struct SceneState {
    /// Master-group rotation: x pitch, y yaw (radians).
    pub sway: Vec2,
    /// Galaxy-group rotation (radians), scrubbed by the scroll timeline.
    pub group_rotation: Vec3,
    /// Accumulated mesh spin around y (radians).
    pub spin: f32,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            sway: Vec2::ZERO,
            group_rotation: Vec3::ZERO,
            spin: 0.0,
        }
    }

    /// Advances one frame: eases the sway toward `target` (5% of the gap, a
    /// low-pass filter rather than a spring) and accumulates the spin.
    pub fn step(&mut self, target: Vec2) {
        self.sway += (target - self.sway) * SWAY_EASE;
        self.spin += SPIN_STEP;
    }

    /// Model matrix for the particle buffer.
    pub fn model_matrix(&self) -> Mat4 {
        let sway = Mat4::from_euler(EulerRot::XYZ, self.sway.x, self.sway.y, 0.0);
        let group = Mat4::from_euler(
            EulerRot::XYZ,
            self.group_rotation.x,
            self.group_rotation.y,
            self.group_rotation.z,
        );
        let spin = Mat4::from_rotation_y(self.spin);
        sway * group * spin
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

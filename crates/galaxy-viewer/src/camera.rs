// src/camera.rs
//! Perspective camera with position / (x, y) rotation state.
//!
//! The camera's primary state is written by the scroll timeline (when
//! present); the pointer sway rotates the master group instead, so both
//! inputs compose without fighting over the same fields.

use glam::{EulerRot, Mat4, Vec2, Vec3};
use winit::dpi::PhysicalSize;

pub const FOV_Y_DEG: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

/// Rest pose: pulled back above the disk, pitched down at it.
pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 4.0, 10.0);
pub const HOME_ROTATION: Vec2 = Vec2::new(-0.3, 0.0);

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Euler rotation: x pitch, y yaw (radians).
    pub rotation: Vec2,

    aspect: f32,
    proj: Mat4,
}

impl Camera {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        let mut camera = Self {
            position: HOME_POSITION,
            rotation: HOME_ROTATION,
            aspect: 1.0,
            proj: Mat4::IDENTITY,
        };
        camera.resize(size);
        camera
    }

    /// Rebuilds the projection for a new viewport. Idempotent for identical
    /// sizes.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.aspect = size.width as f32 / size.height as f32;
            // wgpu clip space: depth in [0, 1], so perspective_rh (not _gl).
            self.proj = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view()
    }

    /// View matrix: inverse of the camera's world transform.
    fn view(&self) -> Mat4 {
        let world = Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
        world.inverse()
    }
}

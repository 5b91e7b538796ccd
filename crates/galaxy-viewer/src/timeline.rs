// src/timeline.rs
//! Optional scroll-scrubbed camera flight.
//!
//! Three labeled segments over the page's normalized scroll progress, each
//! animating camera position, camera rotation, and galaxy-group rotation with
//! quadratic in-out easing. Scrubbing is linear in scroll position; track
//! sampling clamps, so there is no overshoot at either end.
//!
//! The whole feature is an injected capability: [`ScrollTimeline::detect`]
//! decides once at startup, and the rest of the app carries an
//! `Option<ScrollTimeline>`. Absence has zero effect on core rendering.

use crate::camera::{Camera, HOME_POSITION, HOME_ROTATION};
use crate::scene::SceneState;
use glam::{Vec2, Vec3};
use scrubline::{Ease, Track};
use std::f32::consts::PI;

/// Set to `0`, `false`, `no`, or `off` to disable the scroll flight.
pub const TIMELINE_ENV: &str = "GALAXY_TIMELINE";

/// Segment spans over normalized progress: three equal thirds.
const SEG0: (f32, f32) = (0.0, 1.0 / 3.0);
const SEG1: (f32, f32) = (1.0 / 3.0, 2.0 / 3.0);
const SEG2: (f32, f32) = (2.0 / 3.0, 1.0);

pub struct ScrollTimeline {
    cam_x: Track,
    cam_y: Track,
    cam_z: Track,
    rot_x: Track,
    rot_y: Track,
    grp_x: Track,
    grp_y: Track,
    grp_z: Track,
}

impl ScrollTimeline {
    /// Capability probe, run once at startup. Present unless disabled via
    /// [`TIMELINE_ENV`].
    pub fn detect() -> Option<Self> {
        if timeline_disabled_by_env() {
            log::info!("scroll timeline disabled by {TIMELINE_ENV}");
            return None;
        }
        Some(Self::new())
    }

    pub fn new() -> Self {
        let ease = Ease::QuadInOut;
        Self {
            cam_x: Track::builder(HOME_POSITION.x)
                .to(2.0, SEG0.0, SEG0.1, ease)
                .to(-3.0, SEG1.0, SEG1.1, ease)
                .to(0.0, SEG2.0, SEG2.1, ease)
                .build(),
            cam_y: Track::builder(HOME_POSITION.y)
                .to(1.0, SEG0.0, SEG0.1, ease)
                .to(-1.0, SEG1.0, SEG1.1, ease)
                .to(5.0, SEG2.0, SEG2.1, ease)
                .build(),
            cam_z: Track::builder(HOME_POSITION.z)
                .to(6.0, SEG0.0, SEG0.1, ease)
                .to(12.0, SEG1.0, SEG1.1, ease)
                .to(15.0, SEG2.0, SEG2.1, ease)
                .build(),
            rot_x: Track::builder(HOME_ROTATION.x)
                .to(0.0, SEG0.0, SEG0.1, ease)
                .to(0.2, SEG1.0, SEG1.1, ease)
                .to(-0.3, SEG2.0, SEG2.1, ease)
                .build(),
            rot_y: Track::builder(HOME_ROTATION.y)
                .to(0.2, SEG0.0, SEG0.1, ease)
                .to(-0.3, SEG1.0, SEG1.1, ease)
                .to(0.0, SEG2.0, SEG2.1, ease)
                .build(),
            // The group only starts tilting in the second segment; the track
            // holds zero through the first.
            grp_x: Track::builder(0.0)
                .to(1.2, SEG1.0, SEG1.1, ease)
                .to(0.0, SEG2.0, SEG2.1, ease)
                .build(),
            grp_y: Track::builder(0.0).to(PI, SEG2.0, SEG2.1, ease).build(),
            grp_z: Track::builder(0.0)
                .to(0.3, SEG0.0, SEG0.1, ease)
                .to(-0.2, SEG1.0, SEG1.1, ease)
                .to(0.0, SEG2.0, SEG2.1, ease)
                .build(),
        }
    }

    /// Scrubs every track to `progress` and writes the keyframed transforms.
    pub fn apply(&self, progress: f32, camera: &mut Camera, scene: &mut SceneState) {
        camera.position = Vec3::new(
            self.cam_x.sample(progress),
            self.cam_y.sample(progress),
            self.cam_z.sample(progress),
        );
        camera.rotation = Vec2::new(self.rot_x.sample(progress), self.rot_y.sample(progress));
        scene.group_rotation = Vec3::new(
            self.grp_x.sample(progress),
            self.grp_y.sample(progress),
            self.grp_z.sample(progress),
        );
    }
}

impl Default for ScrollTimeline {
    fn default() -> Self {
        Self::new()
    }
}

fn timeline_disabled_by_env() -> bool {
    if let Ok(v) = std::env::var(TIMELINE_ENV) {
        let s = v.trim().to_ascii_lowercase();
        return s == "0" || s == "false" || s == "no" || s == "off";
    }
    false
}

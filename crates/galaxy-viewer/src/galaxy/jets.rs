// src/galaxy/jets.rs
//! Per-frame animation of the bipolar jet streams.
//!
//! Each jet particle travels away from the disk plane along its own side of
//! the y axis. Past the bound it loops back to a small magnitude near the
//! core on the same side — a repeating outflow, not a bounce. Only the
//! y-coordinates of the jet slice ever mutate after generation.

use crate::galaxy::types::PointVertex;

/// Distance a jet particle travels per frame.
pub const JET_STEP: f32 = 0.06;
/// |y| at which a particle loops back toward the core.
pub const JET_BOUND: f32 = 15.0;
/// Reset magnitude is uniform in (0, JET_RESET_MAX).
pub const JET_RESET_MAX: f32 = 2.0;

/// Advances the jet slice by one frame.
///
/// `jets` must be the trailing jet slice of the particle buffer. A particle
/// with `y >= 0` belongs to the +y stream for its whole lifetime; resets stay
/// on the same side.
pub fn advance_jets(jets: &mut [PointVertex], rng: &mut fastrand::Rng) {
    for vert in jets {
        let y = &mut vert.position[1];
        if *y >= 0.0 {
            *y += JET_STEP;
            if *y > JET_BOUND {
                *y = rng.f32() * JET_RESET_MAX;
            }
        } else {
            *y -= JET_STEP;
            if *y < -JET_BOUND {
                *y = -(rng.f32() * JET_RESET_MAX);
            }
        }
    }
}

// src/galaxy/mod.rs
//! Procedural galaxy point cloud.
//!
//! This module provides:
//! - Generation of the particle buffer (disk body + trailing jet slice).
//! - Per-frame animation of the jet particles.
//! - The GPU-side buffer bundle consumed by the points pipeline.

pub mod generate;
pub mod jets;
pub mod types;

pub use self::generate::{generate_points, upload_galaxy};
pub use self::jets::advance_jets;
pub use self::types::{GalaxyConfig, GalaxyGpu, PointVertex, SceneUniformStd140};

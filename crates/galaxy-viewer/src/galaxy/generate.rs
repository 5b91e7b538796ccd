// src/galaxy/generate.rs
//! One-shot procedural generation of the galaxy particle buffer.

use crate::galaxy::types::{GalaxyConfig, GalaxyGpu, PointVertex, SceneUniformStd140};
use std::f32::consts::TAU;
use wgpu::util::DeviceExt;

/// Uniform jitter in [-0.5, 0.5).
#[inline]
fn jitter(rng: &mut fastrand::Rng) -> f32 {
    rng.f32() - 0.5
}

/// Builds the full particle buffer: `body_count` disk particles followed by
/// `jet_count` bipolar jet particles.
///
/// Disk sampling: radius `r = R * u^1.5` biases particles toward the core,
/// angle is uniform. The vertical spread scales with `1.5 - r/R`, so the disk
/// is thick at the core and flattens toward the rim. Color follows the
/// normalized core intensity `1 - r/R` into a red/blue palette with low green
/// (stylistic, not physical).
///
/// Jet particles sit on the polar axis, half at +y and half at -y with
/// magnitude `2 + u*15` and small horizontal jitter, colored violet/blue.
pub fn generate_points(cfg: &GalaxyConfig, rng: &mut fastrand::Rng) -> Vec<PointVertex> {
    let mut verts = Vec::with_capacity(cfg.particle_count);

    for _ in 0..cfg.body_count() {
        let radius = rng.f32().powf(1.5) * cfg.radius;
        let angle = rng.f32() * TAU;

        let x = angle.cos() * radius + jitter(rng);
        let y = jitter(rng) * (1.5 - radius / cfg.radius);
        let z = angle.sin() * radius + jitter(rng);

        let intensity = 1.0 - radius / cfg.radius;
        let shade = rng.f32() * 0.2;
        let color = [
            0.2 + intensity * 0.8 + shade,
            intensity * 0.2,
            0.5 + intensity * 0.4 + shade,
        ];

        verts.push(PointVertex {
            position: [x, y, z],
            color,
        });
    }

    for _ in 0..cfg.jet_count {
        let t = rng.f32();
        let direction = if rng.bool() { 1.0 } else { -1.0 };

        verts.push(PointVertex {
            position: [
                jitter(rng) * 0.4,
                direction * (2.0 + t * 15.0),
                jitter(rng) * 0.4,
            ],
            color: [
                0.7 + rng.f32() * 0.3,
                0.1 + rng.f32() * 0.3,
                0.9 + rng.f32() * 0.1,
            ],
        });
    }

    verts
}

/// Uploads the particle buffer and creates the per-scene UBO and bind group.
pub fn upload_galaxy(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    cfg: &GalaxyConfig,
    verts: &[PointVertex],
) -> GalaxyGpu {
    let vtx = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Galaxy Particles"),
        contents: bytemuck::cast_slice(verts),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    // Written every frame before the draw; zeroed content is fine at creation.
    let ubo = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Galaxy Scene UBO"),
        size: std::mem::size_of::<SceneUniformStd140>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Galaxy Scene BindGroup"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: ubo.as_entire_binding(),
        }],
    });

    GalaxyGpu {
        instances_len: verts.len() as u32,
        jet_tail_offset: (cfg.body_count() * std::mem::size_of::<PointVertex>()) as u64,
        vtx,
        ubo,
        bind,
    }
}

// src/galaxy/types.rs
//! Core data types for the galaxy point cloud, focused on GPU data
//! representation.

/// Defines the per-particle data uploaded to the GPU vertex buffer.
/// Must match the layout of instance inputs in `galaxy_points.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct PointVertex {
    /// Particle position in galaxy-local space.
    pub position: [f32; 3],
    /// Linear RGB color, pre-weighted for additive blending.
    pub color: [f32; 3],
}

/// Defines the per-frame scene uniform, respecting std140 layout.
/// Must match the layout of `SceneUniform` in `galaxy_points.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniformStd140 {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Model matrix: pointer sway × scrubbed group rotation × mesh spin.
    pub model: [[f32; 4]; 4],
    /// Size of the viewport in physical pixels.
    pub viewport_size: [f32; 2],
    /// Width of a point sprite in pixels.
    pub point_size_px: f32,
    /// Global particle opacity.
    pub opacity: f32,
}

/// Parameters of the procedural generation. The buffer size is fixed at
/// creation; indices `[0, particle_count - jet_count)` are disk body and the
/// trailing `jet_count` are jet particles.
#[derive(Debug, Clone, Copy)]
pub struct GalaxyConfig {
    pub particle_count: usize,
    pub jet_count: usize,
    /// Disk radius in scene units.
    pub radius: f32,
    pub point_size_px: f32,
    pub opacity: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            particle_count: 15_000,
            jet_count: 2_000,
            radius: 12.0,
            point_size_px: 2.5,
            opacity: 0.8,
        }
    }
}

impl GalaxyConfig {
    /// Number of disk-body particles preceding the jet slice.
    #[inline]
    pub fn body_count(&self) -> usize {
        self.particle_count - self.jet_count
    }
}

/// Holds all GPU resources for the renderable galaxy.
#[derive(Debug)]
pub struct GalaxyGpu {
    pub instances_len: u32,
    /// Byte offset of the jet slice inside `vtx`, for dirty-tail uploads.
    pub jet_tail_offset: u64,

    /// Vertex buffer containing `PointVertex` data.
    pub vtx: wgpu::Buffer,
    /// Uniform buffer containing `SceneUniformStd140` data.
    pub ubo: wgpu::Buffer,
    /// Bind group connecting the UBO to the pipeline.
    pub bind: wgpu::BindGroup,
}

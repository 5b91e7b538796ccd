use crate::galaxy::types::{GalaxyGpu, PointVertex, SceneUniformStd140};
use wgpu::util::DeviceExt;

/// Instanced point-sprite pipeline for the particle buffer.
///
/// Each particle is a camera-facing quad expanded to a fixed pixel size in
/// the vertex shader, drawn with additive blending and no depth write so
/// overlapping particles accumulate brightness.
pub struct PointsPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub scene_layout: wgpu::BindGroupLayout,
    quad_vb: wgpu::Buffer,
}

impl PointsPipeline {
    pub fn new(device: &wgpu::Device, surface_fmt: wgpu::TextureFormat) -> Self {
        // Uniform buffer layout for per-frame scene data
        let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Galaxy Scene UBO Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<SceneUniformStd140>() as u64,
                    ),
                },
                count: None,
            }],
        });

        // Vertex/fragment shader
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shaders/galaxy_points.wgsl"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../shaders/galaxy_points.wgsl").into(),
            ),
        });

        // Unit quad, expanded per instance in the vertex shader
        let quad_corners: [[f32; 2]; 6] = [
            [-0.5, -0.5],
            [0.5, -0.5],
            [0.5, 0.5],
            [-0.5, -0.5],
            [0.5, 0.5],
            [-0.5, 0.5],
        ];

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Sprite Quad VB"),
            contents: bytemuck::cast_slice(&quad_corners),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Vertex buffer layouts: quad + per-instance data
        let vbuf_layouts = [
            // Quad vertices
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    shader_location: 0,
                    offset: 0,
                    format: wgpu::VertexFormat::Float32x2,
                }],
            },
            // Instance attributes
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    // Position (vec3)
                    wgpu::VertexAttribute {
                        shader_location: 1,
                        offset: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                    // Color (vec3)
                    wgpu::VertexAttribute {
                        shader_location: 2,
                        offset: 12,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                ],
            },
        ];

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Galaxy Points PipelineLayout"),
            bind_group_layouts: &[&scene_layout],
            push_constant_ranges: &[],
        });

        // Additive blending: src + dst for both color and alpha. Depth is
        // fully disabled; draw order does not matter under addition.
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Galaxy Points Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &vbuf_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_fmt,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            pipeline,
            scene_layout,
            quad_vb,
        }
    }

    pub fn draw<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>, galaxy: &'a GalaxyGpu) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &galaxy.bind, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, galaxy.vtx.slice(..));
        rpass.draw(0..6, 0..galaxy.instances_len);
    }
}

//! The rendering orchestrator. Owns the GPU context, the points pipeline,
//! and the egui overlay renderer.

pub mod context;
pub mod points;

use self::{context::GfxContext, points::PointsPipeline};
use crate::galaxy::types::GalaxyGpu;
use std::sync::Arc;
use winit::window::Window;

/// Owns all rendering-related state.
pub struct Renderer {
    pub gfx: GfxContext,
    pub points: PointsPipeline,
    pub egui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let gfx = GfxContext::new(window).await?;

        let points = PointsPipeline::new(&gfx.device, gfx.config.format);

        let egui_renderer = egui_wgpu::Renderer::new(&gfx.device, gfx.config.format, None, 1);

        Ok(Self {
            gfx,
            points,
            egui_renderer,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gfx.resize(new_size);
        }
    }

    /// Records and submits the particle pass: clear to black, one instanced
    /// draw of the whole buffer.
    pub fn render(&mut self, swap_view: &wgpu::TextureView, galaxy: &GalaxyGpu) {
        let mut encoder = self
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Galaxy Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.points.draw(&mut pass, galaxy);
        }

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
    }
}

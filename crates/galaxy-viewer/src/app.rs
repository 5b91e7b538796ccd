use crate::{
    camera::Camera,
    galaxy::{
        advance_jets, generate_points, upload_galaxy,
        types::{GalaxyConfig, GalaxyGpu, PointVertex, SceneUniformStd140},
    },
    loader::Loader,
    pointer::PointerTracker,
    reveal::{Reveal, RevealPose},
    renderer::Renderer,
    scene::SceneState,
    scroll::{ScrollPage, SECTIONS},
    timeline::ScrollTimeline,
    ui,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::{MouseScrollDelta, WindowEvent},
    window::Window,
};

/// Pixels of page scroll per wheel line.
const WHEEL_LINE_PX: f32 = 60.0;

/// The per-session controller. Owns all animation state and the GPU-side
/// resources; nothing lives in module globals.
pub struct App {
    pub renderer: Renderer,
    pub camera: Camera,
    pub scene: SceneState,
    pub pointer: PointerTracker,
    pub loader: Loader,
    pub scroll: ScrollPage,
    /// Present only when the capability probe succeeded at startup.
    pub timeline: Option<ScrollTimeline>,

    cfg: GalaxyConfig,
    /// Authoritative CPU copy of the particle buffer. Only the jet tail
    /// mutates after creation, and only that tail is re-uploaded.
    verts: Vec<PointVertex>,
    galaxy: GalaxyGpu,
    rng: fastrand::Rng,

    reveals: Vec<Reveal>,
    poses: Vec<RevealPose>,

    pub egui_ctx: egui::Context,
    pub egui_state: egui_winit::State,
}

impl App {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let renderer = Renderer::new(window.clone()).await?;
        let size = renderer.gfx.size;

        let cfg = GalaxyConfig::default();
        let mut rng = fastrand::Rng::new();
        let verts = generate_points(&cfg, &mut rng);
        let galaxy = upload_galaxy(
            &renderer.gfx.device,
            &renderer.points.scene_layout,
            &cfg,
            &verts,
        );

        log::info!(
            "generated {} particles ({} disk, {} jet), radius {}",
            cfg.particle_count,
            cfg.body_count(),
            cfg.jet_count,
            cfg.radius
        );

        let timeline = ScrollTimeline::detect();
        if timeline.is_some() {
            log::info!("scroll timeline active");
        }

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &*window,
            None,
            None,
        );

        Ok(Self {
            renderer,
            camera: Camera::new(size),
            scene: SceneState::new(),
            pointer: PointerTracker::new(size),
            loader: Loader::new(),
            scroll: ScrollPage::new(size.height as f32),
            timeline,
            cfg,
            verts,
            galaxy,
            rng,
            reveals: SECTIONS.iter().map(|_| Reveal::new()).collect(),
            poses: vec![RevealPose::HIDDEN; SECTIONS.len()],
            egui_ctx,
            egui_state,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.renderer.resize(new_size);
            self.camera.resize(new_size);
            self.pointer.set_viewport(new_size);
            self.scroll.refresh(new_size.height as f32);
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        if response.consumed {
            return true;
        }

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.on_cursor_moved(*position);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                // Wheel up (positive) moves the page up.
                self.scroll.scroll_by(-px);
            }
            WindowEvent::Resized(physical_size) => {
                self.resize(*physical_size);
            }
            _ => {}
        }

        false
    }

    /// One animation frame, GPU-free: loader schedule, smooth-scroll glide,
    /// pointer sway, scrubbed timeline, jet advance, reveal poses.
    pub fn step(&mut self, now: Instant) {
        if self.loader.poll(now, &mut self.rng) {
            log::info!("loading complete; page revealed");
            // Dependent layout recalculation, as the overlay no longer pins
            // the page.
            self.scroll.refresh(self.renderer.gfx.size.height as f32);
        }

        self.scroll.step();
        self.scene.step(self.pointer.sway_target());

        if let Some(timeline) = &self.timeline {
            timeline.apply(self.scroll.progress(), &mut self.camera, &mut self.scene);
        }

        let body = self.cfg.body_count();
        advance_jets(&mut self.verts[body..], &mut self.rng);

        let viewport_h = self.scroll.viewport_h();
        for (i, reveal) in self.reveals.iter_mut().enumerate() {
            self.poses[i] = reveal.step(self.scroll.block_top(i), viewport_h);
        }
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        self.step(Instant::now());

        let body = self.cfg.body_count();

        // Upload the dirty jet tail and this frame's scene uniform.
        self.renderer.gfx.queue.write_buffer(
            &self.galaxy.vtx,
            self.galaxy.jet_tail_offset,
            bytemuck::cast_slice(&self.verts[body..]),
        );

        let uniform = SceneUniformStd140 {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            model: self.scene.model_matrix().to_cols_array_2d(),
            viewport_size: self.renderer.gfx.viewport_size(),
            point_size_px: self.cfg.point_size_px,
            opacity: self.cfg.opacity,
        };
        self.renderer
            .gfx
            .queue
            .write_buffer(&self.galaxy.ubo, 0, bytemuck::bytes_of(&uniform));

        let frame = self.renderer.gfx.surface.get_current_texture()?;
        let swap_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(&swap_view, &self.galaxy);

        // UI frame: nav + sections, with the loading overlay on top while it
        // is still visible.
        let egui_input = self.egui_state.take_egui_input(window);
        self.egui_ctx.begin_frame(egui_input);

        if let Some(target) = ui::draw_nav(&self.egui_ctx) {
            self.scroll.scroll_to(target);
        }
        ui::draw_sections(&self.egui_ctx, &self.scroll, &self.poses);
        if self.loader.visible() {
            ui::draw_loader(&self.egui_ctx, self.loader.progress());
        }

        let egui_output = self.egui_ctx.end_frame();
        let shapes = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.renderer.gfx.config.width,
                self.renderer.gfx.config.height,
            ],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };

        let mut encoder = self
            .renderer
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("UI Encoder"),
            });

        for (id, delta) in &egui_output.textures_delta.set {
            self.renderer.egui_renderer.update_texture(
                &self.renderer.gfx.device,
                &self.renderer.gfx.queue,
                *id,
                delta,
            );
        }

        self.renderer.egui_renderer.update_buffers(
            &self.renderer.gfx.device,
            &self.renderer.gfx.queue,
            &mut encoder,
            &shapes,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("EGUI Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .egui_renderer
                .render(&mut render_pass, &shapes, &screen_descriptor);
        }

        for id in &egui_output.textures_delta.free {
            self.renderer.egui_renderer.free_texture(id);
        }

        self.renderer
            .gfx
            .queue
            .submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

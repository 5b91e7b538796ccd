use anyhow::{anyhow, Result};
use std::sync::Arc;
use winit::window::Window;

/// Holds the GPU handles every draw goes through: surface, device, queue,
/// and the current swap-chain configuration.
pub struct GfxContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl GfxContext {
    /// Creates a new graphics context bound to the given window.
    ///
    /// Any failure here (no adapter, no device, no surface) aborts startup;
    /// there is no degraded mode without a drawing surface.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());

        // The surface must outlive the window; `Arc` guarantees this.
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("Failed to find a suitable GPU adapter."))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    // Default limits; a 15k-point buffer needs nothing exotic.
                    required_limits: wgpu::Limits::default(),
                },
                None, // no trace
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        // Fifo paces the redraw loop to the display refresh, which is what
        // the per-frame animation constants assume.
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log::debug!(
            "gfx context ready: {:?}, {}x{}",
            surface_format,
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigures the swap chain for a new window size. Zero-sized updates
    /// (minimize) are ignored; repeating the current size is harmless.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Current output size in physical pixels, as passed to the shader.
    #[inline]
    pub fn viewport_size(&self) -> [f32; 2] {
        [self.size.width as f32, self.size.height as f32]
    }
}

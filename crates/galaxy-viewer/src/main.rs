//! Entry point for the galaxy viewer application.

use anyhow::Result;
use galaxy_viewer::app::App;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Galaxy Viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .build(&event_loop)?,
    );

    // Initialise the application (async → sync). Failures here are the
    // fail-fast path: no window, adapter, or surface means no page.
    let mut app = pollster::block_on(App::new(window.clone()))?;

    // One redraw per display frame: AboutToWait requests the next redraw,
    // and all per-frame animation happens inside `App::render`.
    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => {
                if app.handle_event(&window, &event) {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::KeyboardInput { event, .. } => {
                        if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                            elwt.exit();
                        }
                    }
                    WindowEvent::RedrawRequested => match app.render(&window) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            // Reconfigure at the current size and try again
                            // next frame.
                            app.resize(app.renderer.gfx.size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("WGPU out of memory – exiting.");
                            elwt.exit();
                        }
                        Err(e) => log::error!("Render error: {:?}", e),
                    },
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

//! Room viewer - main entry point.
//!
//! Loads the room in the background, attaches the light rig once it is
//! available and lets the user orbit and zoom with the mouse.
//!
//! Usage: `roomview [config.toml]`

mod context;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use context::ViewerContext;
use roomview_core::{Timer, ViewerConfig};
use roomview_platform::{PointerTracker, Window};

struct App {
    config: ViewerConfig,
    window: Option<Window>,
    context: Option<ViewerContext>,
    pointer: PointerTracker,
    timer: Timer,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            context: None,
            pointer: PointerTracker::new(),
            timer: Timer::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match Window::new(event_loop, 1280, 720, "Room Viewer") {
                Ok(window) => match ViewerContext::new(&self.config, window.aspect_ratio()) {
                    Ok(context) => {
                        info!("Initialization complete, entering main loop");
                        self.context = Some(context);
                        self.window = Some(window);
                    }
                    Err(e) => {
                        error!("Failed to start scene loader: {}", e);
                        event_loop.exit();
                    }
                },
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(pointer_event) = self.pointer.translate(&event) {
            if let Some(ref mut context) = self.context {
                context.handle_pointer(pointer_event);
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!(
                    "Close requested, shutting down after {} frames ({:.1} fps)",
                    self.timer.frames(),
                    self.timer.average_fps()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                    if let Some(ref mut context) = self.context {
                        context.camera.set_aspect(window.aspect_ratio());
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.timer.tick().as_secs_f32();

                if let Some(ref mut context) = self.context {
                    context.poll_load();
                    context.frame(delta);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    roomview_core::init_logging();
    info!("Starting Room Viewer");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ViewerConfig::load_or_default(config_path.as_deref())?;

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create app and run
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

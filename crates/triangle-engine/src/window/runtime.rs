use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::bootstrap::{self, CANVAS_ID, Outcome, Triangle};
use crate::device::{GpuInit, WgpuHost};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Id the window is registered under as a canvas.
    pub canvas_id: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Red Triangle".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            canvas_id: CANVAS_ID.to_string(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    window: Option<Arc<Window>>,
    /// Keeps the device and surface alive while the window is open.
    _triangle: Option<Triangle<WgpuHost>>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            window: None,
            _triangle: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Arc::new(window))
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let mut host = WgpuHost::new(self.gpu_init.clone());
        host.register_canvas(self.config.canvas_id.clone(), window);

        match pollster::block_on(bootstrap::run(&mut host)) {
            Ok(Outcome::Rendered(triangle)) => self._triangle = Some(triangle),
            // The abort was already logged.
            Ok(Outcome::Aborted { .. }) => event_loop.exit(),
            Err(e) => {
                log::error!("rendering failed: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
        }
    }
}

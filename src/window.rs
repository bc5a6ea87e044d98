use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, TouchPhase, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::gpu::GpuState;
use crate::simulation::Snowfall;

/// The windowed heartbeat hosting a [`Snowfall`] context.
///
/// Every `RedrawRequested` ticks the context, renders, and requests the next
/// redraw. The redraw chain never stops once started; toggling only changes
/// whether a tick steps and draws or merely clears.
pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    snowfall: Snowfall,
    title: String,
    fatal: Option<RunError>,
}

impl App {
    pub(crate) fn new(snowfall: Snowfall, title: String) -> Self {
        Self {
            window: None,
            gpu: None,
            snowfall,
            title,
            fatal: None,
        }
    }

    pub(crate) fn take_fatal(&mut self) -> Option<RunError> {
        self.fatal.take()
    }

    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map(|w| w.scale_factor()).unwrap_or(1.0)
    }

    fn apply_resize(&mut self, width: f32, height: f32, scale_factor: f64) {
        self.snowfall.on_resize(width, height, scale_factor);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(self.snowfall.surface());
        }
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            let state = if self.snowfall.is_running() { "on" } else { "off" };
            window.set_title(&format!("{} [snow: {}]", self.title, state));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fatal = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let scale_factor = window.scale_factor();
        let size = window.inner_size().to_logical::<f32>(scale_factor);
        self.snowfall.on_resize(size.width, size.height, scale_factor);

        // The effect is non-essential: without a usable GPU the window keeps
        // running and the simulation stays inert.
        match pollster::block_on(GpuState::new(window.clone(), self.snowfall.surface())) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => eprintln!("snow disabled: {}", e),
        }

        window.request_redraw();
        self.window = Some(window);
        self.refresh_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                let scale_factor = self.scale_factor();
                let size = physical_size.to_logical::<f32>(scale_factor);
                self.apply_resize(size.width, size.height, scale_factor);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let physical_size = self
                    .window
                    .as_ref()
                    .map(|w| w.inner_size())
                    .unwrap_or_default();
                let size = physical_size.to_logical::<f32>(scale_factor);
                self.apply_resize(size.width, size.height, scale_factor);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor());
                self.snowfall
                    .pointer_mut()
                    .set_position(Vec2::new(logical.x, logical.y));
            }
            WindowEvent::CursorLeft { .. } => {
                self.snowfall.pointer_mut().clear();
            }
            WindowEvent::Touch(touch) => match touch.phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    let logical = touch.location.to_logical::<f32>(self.scale_factor());
                    self.snowfall
                        .pointer_mut()
                        .set_position(Vec2::new(logical.x, logical.y));
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    self.snowfall.pointer_mut().clear();
                }
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Space)
                {
                    self.snowfall.toggle();
                    self.refresh_title();
                }
            }
            WindowEvent::RedrawRequested => {
                let running = self.snowfall.tick(Instant::now());

                if let Some(gpu) = &mut self.gpu {
                    let result = if running {
                        gpu.draw(self.snowfall.field().flakes())
                    } else {
                        gpu.clear()
                    };
                    match result {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(self.snowfall.surface()),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

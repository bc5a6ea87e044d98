//! Simulation builder and the per-window simulation context.

use std::time::Instant;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::RunError;
use crate::field::SnowField;
use crate::pointer::PointerTracker;
use crate::sampler::Sampler;
use crate::surface::SurfaceManager;
use crate::time::FrameTimer;
use crate::window::App;

/// Flake count used when the host does not pick one.
pub const DEFAULT_DENSITY: usize = 600;

/// A snowfall simulation builder.
///
/// Use method chaining to configure, then call `.run()` to open the window.
pub struct Simulation {
    density: usize,
    seed: Option<u64>,
    title: String,
}

impl Simulation {
    /// Create a simulation with default settings.
    pub fn new() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: None,
            title: "snowfield".to_string(),
        }
    }

    /// Set the target flake density. Clamped to the pool bounds on populate.
    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    /// Seed the attribute sampler, making flake generation deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(Snowfall::new(self.density, self.seed), self.title);
        event_loop.run_app(&mut app)?;

        match app.take_fatal() {
            Some(fatal) => Err(fatal),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// All mutable simulation state, owned by the hosting window.
///
/// Input handlers write into this context between heartbeat ticks; the tick
/// reads whatever is current. Single-threaded, last writer wins.
#[derive(Debug, Clone)]
pub struct Snowfall {
    field: SnowField,
    pointer: PointerTracker,
    surface: SurfaceManager,
    timer: FrameTimer,
    density: usize,
    running: bool,
}

impl Snowfall {
    /// Create a running context populated at `density` over the placeholder
    /// surface size. The first resize rebuilds the field at the real size.
    pub fn new(density: usize, seed: Option<u64>) -> Self {
        let sampler = match seed {
            Some(seed) => Sampler::with_seed(seed),
            None => Sampler::new(),
        };
        let surface = SurfaceManager::new();
        let mut field = SnowField::new(sampler);
        field.populate(density, surface.extent());

        Self {
            field,
            pointer: PointerTracker::new(),
            surface,
            timer: FrameTimer::new(),
            density,
            running: true,
        }
    }

    /// One heartbeat. Steps the field when running; the timer advances
    /// either way so a later resume does not observe a stale interval.
    ///
    /// Returns whether this frame should draw the field. A `false` frame
    /// clears the surface instead of freezing the last image.
    pub fn tick(&mut self, now: Instant) -> bool {
        let delta_ms = self.timer.tick(now);
        if self.running {
            self.field
                .step_all(delta_ms, self.pointer.position(), self.surface.extent());
        }
        self.running
    }

    /// Flip between Running and Stopped, returning the new state.
    /// Flake state is kept across a stop, resuming continues mid-fall.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Adopt a new surface size, then rebuild the whole field at the
    /// unchanged target density. In-flight flake positions are discarded.
    pub fn on_resize(&mut self, width: f32, height: f32, scale_factor: f64) {
        self.surface.resize(width, height, scale_factor);
        self.field.populate(self.density, self.surface.extent());
    }

    /// The live field.
    #[inline]
    pub fn field(&self) -> &SnowField {
        &self.field
    }

    /// Pointer state, written by input handlers.
    #[inline]
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    /// Surface bookkeeping, read by the renderer.
    #[inline]
    pub fn surface(&self) -> &SurfaceManager {
        &self.surface
    }

    /// Whether ticks currently step the field.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target flake density.
    #[inline]
    pub fn density(&self) -> usize {
        self.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_starts_running_and_populated() {
        let ctx = Snowfall::new(150, Some(1));
        assert!(ctx.is_running());
        assert_eq!(ctx.field().len(), 150);
        assert_eq!(ctx.density(), 150);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut ctx = Snowfall::new(60, Some(2));
        assert!(!ctx.toggle());
        assert!(!ctx.is_running());
        assert!(ctx.toggle());
        assert!(ctx.is_running());
    }

    #[test]
    fn test_seeded_contexts_agree() {
        let a = Snowfall::new(100, Some(3));
        let b = Snowfall::new(100, Some(3));
        for (x, y) in a.field().flakes().iter().zip(b.field().flakes()) {
            assert_eq!(x.position, y.position);
        }
    }
}

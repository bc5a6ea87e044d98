//! # snowfield
//!
//! A pointer-reactive, density-adaptive field of falling snow rendered in a
//! native window.
//!
//! The simulation is CPU-side and deliberately simple: a pool of flakes
//! drifts down a logical-unit surface, sways on a per-flake phase
//! oscillation, and is pushed away from the pointer with a smooth
//! distance-based falloff. Rendering clears and redraws the whole surface
//! every frame as instanced circle sprites.
//!
//! ## Quick Start
//!
//! ```ignore
//! use snowfield::Simulation;
//!
//! fn main() -> Result<(), snowfield::RunError> {
//!     Simulation::new()
//!         .with_density(600)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The context
//!
//! All mutable state (flake pool, pointer tracker, surface bookkeeping,
//! frame timer, running flag) lives in one [`Snowfall`] context owned by the
//! hosting window. Input events write into it between heartbeat ticks; each
//! tick reads whatever is current. Single-threaded, last writer wins.
//!
//! ### The heartbeat
//!
//! The redraw chain never stops once started. Toggling the effect (space
//! bar) only switches a tick between step-and-draw and clear-only, so
//! disabling the snow blanks the surface rather than freezing it. Frame
//! deltas are clamped to 32 ms, so a backgrounded window resumes gently.
//!
//! ### Density
//!
//! The pool holds between 50 and 2000 flakes. A resize rebuilds the whole
//! field at the unchanged target density.
//!
//! ### Determinism
//!
//! All attribute randomness flows through one [`Sampler`]. Production use
//! seeds it from entropy; tests inject a fixed seed via
//! [`Simulation::with_seed`] or [`Sampler::with_seed`].

mod error;
mod field;
mod gpu;
mod particle;
mod pointer;
mod sampler;
mod simulation;
mod surface;
mod time;
mod window;

pub use error::{GpuError, RunError};
pub use field::{SnowField, MAX_FLAKES, MIN_FLAKES};
pub use glam::Vec2;
pub use particle::{Snowflake, EDGE_MARGIN, REPULSION_RADIUS};
pub use pointer::PointerTracker;
pub use sampler::Sampler;
pub use simulation::{Simulation, Snowfall, DEFAULT_DENSITY};
pub use surface::SurfaceManager;
pub use time::{FrameTimer, DEFAULT_STEP_MS, MAX_STEP_MS};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::error::RunError;
    pub use crate::field::SnowField;
    pub use crate::particle::Snowflake;
    pub use crate::pointer::PointerTracker;
    pub use crate::sampler::Sampler;
    pub use crate::simulation::{Simulation, Snowfall};
    pub use crate::surface::SurfaceManager;
    pub use crate::time::FrameTimer;
    pub use crate::Vec2;
}

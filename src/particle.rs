//! A single falling flake.
//!
//! Flakes are pool-owned value types: every attribute is sampled once at
//! creation or respawn and only `position` and `phase` mutate while falling.
//! Identity is positional, nothing outside the pool holds a reference across
//! a respawn.

use std::f32::consts::PI;
use std::ops::Range;

use glam::Vec2;

use crate::sampler::Sampler;

/// Converts a millisecond delta into the visually calibrated drift rate.
pub(crate) const TIME_SCALE: f32 = 0.06;
/// Amplitude of the sideways sway driven by the phase oscillation.
const SWAY_AMPLITUDE: f32 = 0.3;
/// Distance within which the pointer deflects flakes.
pub const REPULSION_RADIUS: f32 = 100.0;
const REPULSION_STRENGTH: f32 = 6.0;
const REPULSION_TIME_SCALE: f32 = 0.02;
/// How far past an edge a flake may drift before it respawns.
pub const EDGE_MARGIN: f32 = 50.0;
/// Respawned flakes drop in from up to this far above the top edge.
const RESPAWN_DROP: f32 = 50.0;

const RADIUS_RANGE: Range<f32> = 1.0..4.0;
const FALL_SPEED_RANGE: Range<f32> = 0.3..1.0;
const WIND_DRIFT_RANGE: Range<f32> = -0.4..0.9;
const OPACITY_RANGE: Range<f32> = 0.4..0.95;
const PHASE_RANGE: Range<f32> = -PI..PI;
const PHASE_SPEED_RANGE: Range<f32> = -0.01..0.01;

#[derive(Debug, Clone)]
pub struct Snowflake {
    /// Position in logical surface coordinates.
    pub position: Vec2,
    /// Drawn size, fixed for the flake's lifetime.
    pub radius: f32,
    /// Vertical drift magnitude.
    pub fall_speed: f32,
    /// Horizontal drift magnitude.
    pub wind_drift: f32,
    /// Render alpha, fixed for the flake's lifetime.
    pub opacity: f32,
    /// Oscillation angle, advanced every tick.
    pub phase: f32,
    /// Rate of phase advance.
    pub phase_speed: f32,
}

impl Snowflake {
    /// Create a flake via [`Snowflake::reset`].
    pub fn spawn(sampler: &mut Sampler, extent: Vec2, initial: bool) -> Self {
        let mut flake = Self {
            position: Vec2::ZERO,
            radius: 0.0,
            fall_speed: 0.0,
            wind_drift: 0.0,
            opacity: 0.0,
            phase: 0.0,
            phase_speed: 0.0,
        };
        flake.reset(sampler, extent, initial);
        flake
    }

    /// Resample every attribute.
    ///
    /// With `initial` the flake lands anywhere on the surface so the first
    /// frame already shows a filled field; otherwise it starts just above the
    /// top edge and falls in.
    pub fn reset(&mut self, sampler: &mut Sampler, extent: Vec2, initial: bool) {
        self.position.x = sampler.sample(0.0..extent.x);
        self.position.y = if initial {
            sampler.sample(0.0..extent.y)
        } else {
            -sampler.sample(0.0..RESPAWN_DROP)
        };
        self.radius = sampler.sample(RADIUS_RANGE);
        self.fall_speed = sampler.sample(FALL_SPEED_RANGE);
        self.wind_drift = sampler.sample(WIND_DRIFT_RANGE);
        self.opacity = sampler.sample(OPACITY_RANGE);
        self.phase = sampler.sample(PHASE_RANGE);
        self.phase_speed = sampler.sample(PHASE_SPEED_RANGE);
    }

    /// Advance the flake by `delta_ms`, deflect it away from a nearby
    /// pointer, and respawn it once it leaves the surface with margin.
    pub fn step(&mut self, delta_ms: f32, pointer: Option<Vec2>, extent: Vec2, sampler: &mut Sampler) {
        self.phase += self.phase_speed * delta_ms * TIME_SCALE;
        self.position.x += self.wind_drift * delta_ms * TIME_SCALE;
        self.position.y += self.fall_speed * delta_ms * TIME_SCALE + self.phase.sin() * SWAY_AMPLITUDE;

        if let Some(pointer) = pointer {
            let offset = self.position - pointer;
            let dist = offset.length();
            if dist < REPULSION_RADIUS {
                let force = (REPULSION_RADIUS - dist) / REPULSION_RADIUS * REPULSION_STRENGTH;
                // A flake sitting exactly on the pointer would otherwise divide by zero.
                self.position += offset / dist.max(1.0) * force * delta_ms * REPULSION_TIME_SCALE;
            }
        }

        if self.position.x > extent.x + EDGE_MARGIN
            || self.position.x < -EDGE_MARGIN
            || self.position.y > extent.y + EDGE_MARGIN
        {
            self.reset(sampler, extent, false);
        }
    }
}

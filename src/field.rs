//! The live flake pool.

use glam::Vec2;

use crate::particle::Snowflake;
use crate::sampler::Sampler;

/// Fewest flakes a populated field may hold.
pub const MIN_FLAKES: usize = 50;
/// Most flakes a populated field may hold.
pub const MAX_FLAKES: usize = 2000;

/// Owns the flakes rendered each frame, sized to a target density.
#[derive(Debug, Clone)]
pub struct SnowField {
    flakes: Vec<Snowflake>,
    sampler: Sampler,
}

impl SnowField {
    /// Create an empty field drawing randomness from `sampler`.
    pub fn new(sampler: Sampler) -> Self {
        Self {
            flakes: Vec::new(),
            sampler,
        }
    }

    /// Discard the current flakes and build a fresh field of `target` flakes
    /// (clamped to `[MIN_FLAKES, MAX_FLAKES]`) spread over the whole extent.
    ///
    /// This is a deliberate full reset, not an incremental resize.
    pub fn populate(&mut self, target: usize, extent: Vec2) {
        let count = target.clamp(MIN_FLAKES, MAX_FLAKES);
        self.flakes = (0..count)
            .map(|_| Snowflake::spawn(&mut self.sampler, extent, true))
            .collect();
    }

    /// Step every flake in insertion order. Flakes only interact with the
    /// shared pointer state, never with each other, so order does not affect
    /// the outcome.
    pub fn step_all(&mut self, delta_ms: f32, pointer: Option<Vec2>, extent: Vec2) {
        for flake in &mut self.flakes {
            flake.step(delta_ms, pointer, extent, &mut self.sampler);
        }
    }

    /// Number of live flakes.
    #[inline]
    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    /// Whether the field has been populated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    /// The live flakes, for rendering and inspection.
    #[inline]
    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    fn populated(target: usize) -> SnowField {
        let mut field = SnowField::new(Sampler::with_seed(1));
        field.populate(target, EXTENT);
        field
    }

    #[test]
    fn test_populate_clamps_low() {
        assert_eq!(populated(3).len(), MIN_FLAKES);
    }

    #[test]
    fn test_populate_clamps_high() {
        assert_eq!(populated(100_000).len(), MAX_FLAKES);
    }

    #[test]
    fn test_populate_keeps_in_range_target() {
        assert_eq!(populated(600).len(), 600);
    }

    #[test]
    fn test_populate_discards_previous_flakes() {
        let mut field = populated(200);
        field.step_all(16.0, None, EXTENT);
        field.populate(80, EXTENT);
        assert_eq!(field.len(), 80);
        for flake in field.flakes() {
            assert!(flake.position.y >= 0.0 && flake.position.y <= EXTENT.y);
        }
    }

    #[test]
    fn test_step_all_touches_every_flake() {
        let mut field = populated(100);
        let before: Vec<f32> = field.flakes().iter().map(|f| f.phase).collect();
        field.step_all(16.0, None, EXTENT);
        for (flake, phase) in field.flakes().iter().zip(before) {
            // phase_speed can be arbitrarily close to zero, so compare the
            // exact update instead of asserting inequality
            assert_eq!(flake.phase, phase + flake.phase_speed * 16.0 * 0.06);
        }
    }
}

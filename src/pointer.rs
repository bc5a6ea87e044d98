//! Pointer state shared with the simulation step.
//!
//! Input handlers overwrite the tracked position as events arrive; the
//! simulation samples whatever is current at the start of a tick. There is no
//! queue, intermediate positions between ticks are dropped on purpose.

use glam::Vec2;

/// Sentinel parked far outside any plausible surface.
const ABSENT: Vec2 = Vec2::new(-9999.0, -9999.0);

/// Last known pointer (mouse or touch) position in logical coordinates.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    /// Create a tracker with no active pointer.
    pub fn new() -> Self {
        Self { position: ABSENT }
    }

    /// Record a pointer move.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Mark the pointer as gone (cursor left, touch ended).
    pub fn clear(&mut self) {
        self.position = ABSENT;
    }

    /// The active pointer position, or `None` while parked at the sentinel.
    pub fn position(&self) -> Option<Vec2> {
        (self.position.x > -1.0).then_some(self.position)
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

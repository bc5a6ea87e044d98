//! Frame timing for the simulation heartbeat.

use std::time::Instant;

/// Upper bound on the integration delta, in milliseconds. A stalled or
/// backgrounded heartbeat resumes with at most one step of this length
/// instead of a position explosion.
pub const MAX_STEP_MS: f32 = 32.0;
/// Delta used for the first tick or after a non-positive observation.
pub const DEFAULT_STEP_MS: f32 = 16.0;

/// Tracks the previous tick and produces clamped frame deltas.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_tick: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Milliseconds elapsed since the previous tick, clamped to
    /// [`MAX_STEP_MS`]. The first tick, or one observing a non-positive
    /// interval, yields [`DEFAULT_STEP_MS`].
    pub fn tick(&mut self, now: Instant) -> f32 {
        let elapsed_ms = self
            .last_tick
            .map(|prev| now.saturating_duration_since(prev).as_secs_f64() * 1000.0);
        self.last_tick = Some(now);

        match elapsed_ms {
            Some(ms) if ms > 0.0 => (ms as f32).min(MAX_STEP_MS),
            _ => DEFAULT_STEP_MS,
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_tick_uses_default_step() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(Instant::now()), DEFAULT_STEP_MS);
    }

    #[test]
    fn test_short_interval_passes_through() {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        timer.tick(start);
        let delta = timer.tick(start + Duration::from_millis(10));
        assert!((delta - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_long_stall_clamps_to_max() {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        timer.tick(start);
        assert_eq!(timer.tick(start + Duration::from_millis(5000)), MAX_STEP_MS);
    }

    #[test]
    fn test_zero_interval_uses_default_step() {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        timer.tick(start);
        assert_eq!(timer.tick(start), DEFAULT_STEP_MS);
    }
}

//! Frame timing utilities
//!
//! The host scheduler hands the simulation a monotonically increasing
//! timestamp once per display refresh; the clock turns that into the
//! per-tick delta the entity timers consume.

/// Converts monotonic timestamps into per-frame deltas.
///
/// Timestamps and deltas are in milliseconds. The previous timestamp
/// starts at zero, so the first delta equals the first timestamp the
/// host delivers.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_time: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock with the previous timestamp at zero.
    pub fn new() -> Self {
        Self { last_time: 0.0 }
    }

    /// Advance to `timestamp` and return the elapsed time since the
    /// previous call (or since zero on the first call).
    pub fn delta(&mut self, timestamp: f32) -> f32 {
        let delta = timestamp - self.last_time;
        self.last_time = timestamp;
        delta
    }

    /// Timestamp of the most recent frame.
    pub fn last_time(&self) -> f32 {
        self.last_time
    }

    /// Reset the clock to its initial state.
    pub fn reset(&mut self) {
        self.last_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_delta_measured_from_zero() {
        let mut clock = FrameClock::new();
        assert_relative_eq!(clock.delta(16.0), 16.0);
    }

    #[test]
    fn test_delta_between_frames() {
        let mut clock = FrameClock::new();
        clock.delta(100.0);
        assert_relative_eq!(clock.delta(116.7), 16.7, epsilon = 1e-4);
        assert_relative_eq!(clock.last_time(), 116.7);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.delta(500.0);
        clock.reset();
        assert_relative_eq!(clock.delta(20.0), 20.0);
    }
}

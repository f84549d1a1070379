//! Frame timing
//!
//! Turns the host's refresh timestamps into elapsed milliseconds.

use crate::consts::MAX_FRAME_MS;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ms since the previous timestamp.
    ///
    /// The first call has no previous timestamp and returns 0. Backward or
    /// non-finite steps return 0; long gaps are capped at MAX_FRAME_MS.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        let elapsed = match self.last {
            Some(last) => timestamp - last,
            None => 0.0,
        };
        if timestamp.is_finite() {
            self.last = Some(timestamp);
        }
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0.0;
        }
        (elapsed as f32).min(MAX_FRAME_MS)
    }

    /// Forget the previous timestamp (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
        assert_eq!(clock.tick(12_361.5), 16.5);
    }

    #[test]
    fn test_backward_step_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(90.0), 0.0);
        assert_eq!(clock.tick(100.0), 10.0);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(10_000.0), MAX_FRAME_MS);
    }

    #[test]
    fn test_nan_timestamp_is_ignored() {
        let mut clock = FrameClock::new();
        clock.tick(50.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert_eq!(clock.tick(66.0), 16.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.tick(50.0);
        clock.reset();
        assert_eq!(clock.tick(5_000.0), 0.0);
    }
}

//! Fixed-rate tick pacing
//!
//! Converts elapsed wall-clock time into a whole number of simulation ticks,
//! carrying the remainder forward.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;
use crate::error::{GameError, validate_frame_rate};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    accumulator: f64,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(fps: u32) -> Result<Self, GameError> {
        let fps = validate_frame_rate(fps)?;
        Ok(Self {
            step: 1.0 / f64::from(fps),
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        })
    }

    /// Length of one tick
    pub fn step_duration(&self) -> Duration {
        Duration::from_secs_f64(self.step)
    }

    /// Feed elapsed time; returns how many ticks to run now
    ///
    /// At most `MAX_SUBSTEPS` ticks are returned per call, and any backlog
    /// beyond that is dropped rather than replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        // Clamp huge gaps (debugger pause, suspended window)
        self.accumulator += elapsed.as_secs_f64().min(0.25);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_fps() {
        assert!(FixedStep::new(0).is_err());
    }

    #[test]
    fn test_accumulates_partial_steps() {
        let mut clock = FixedStep::new(60).unwrap();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert_eq!(clock.advance(Duration::from_millis(40)), 2);
    }

    #[test]
    fn test_substeps_bounded() {
        let mut clock = FixedStep::new(60).unwrap();
        assert_eq!(clock.advance(Duration::from_secs(5)), MAX_SUBSTEPS);
        // Backlog was dropped
        assert!(clock.advance(Duration::ZERO) <= 1);
    }

    #[test]
    fn test_step_duration() {
        let clock = FixedStep::new(50).unwrap();
        assert_eq!(clock.step_duration(), Duration::from_millis(20));
    }
}

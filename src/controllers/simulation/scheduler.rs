use std::time::Duration;

use crate::core::flight::tuning::FlightTuning;

/// Fixed-timestep accumulator.
///
/// Frame time is capped before it is banked so a long stall runs a bounded
/// number of steps; leftover time carries into the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStepScheduler {
    timestep_secs: f64,
    max_frame_delta_secs: f64,
    accumulator_secs: f64,
}

impl FixedStepScheduler {
    #[must_use]
    pub fn new(timestep_secs: f64, max_frame_delta_secs: f64) -> Self {
        Self {
            timestep_secs,
            max_frame_delta_secs,
            accumulator_secs: 0.0,
        }
    }

    #[must_use]
    pub fn from_tuning(tuning: &FlightTuning) -> Self {
        Self::new(tuning.physics_timestep_secs, tuning.max_frame_delta_secs)
    }

    /// Banks `elapsed` and calls `step` once per whole timestep available.
    /// Returns the number of steps run.
    pub fn advance<F>(&mut self, elapsed: Duration, mut step: F) -> u32
    where
        F: FnMut(),
    {
        let dt = self.timestep_secs;
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        self.accumulator_secs += elapsed.as_secs_f64().min(self.max_frame_delta_secs);
        if !self.accumulator_secs.is_finite() {
            self.accumulator_secs = 0.0;
        }

        let mut steps = 0;
        while self.accumulator_secs >= dt {
            step();
            self.accumulator_secs -= dt;
            steps += 1;
        }

        steps
    }

    #[must_use]
    pub fn timestep_secs(&self) -> f64 {
        self.timestep_secs
    }

    /// Banked time not yet consumed by a step, always below one timestep.
    #[must_use]
    pub fn accumulator_secs(&self) -> f64 {
        self.accumulator_secs
    }

    pub fn reset(&mut self) {
        self.accumulator_secs = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::FixedStepScheduler;
    use std::time::Duration;

    const STEP: f64 = 1.0 / 64.0;

    fn scheduler() -> FixedStepScheduler {
        FixedStepScheduler::new(STEP, 0.1)
    }

    #[test]
    fn test_exact_timestep_runs_one_step() {
        let mut scheduler = scheduler();
        let mut calls = 0;

        let steps = scheduler.advance(Duration::from_secs_f64(STEP), || calls += 1);

        assert_eq!(steps, 1);
        assert_eq!(calls, 1);
        assert_eq!(scheduler.accumulator_secs(), 0.0);
    }

    #[test]
    fn test_zero_elapsed_runs_nothing() {
        let mut scheduler = scheduler();

        let steps = scheduler.advance(Duration::ZERO, || panic!("must not step"));

        assert_eq!(steps, 0);
    }

    #[test]
    fn test_partial_frames_accumulate_into_a_step() {
        let mut scheduler = scheduler();
        let frame = Duration::from_millis(10);

        assert_eq!(scheduler.advance(frame, || {}), 0);
        assert_eq!(scheduler.advance(frame, || {}), 1);
        assert_eq!(scheduler.advance(frame, || {}), 0);
        assert!(scheduler.accumulator_secs() < STEP);
        assert!(scheduler.accumulator_secs() > 0.0);
    }

    #[test]
    fn test_long_stall_is_capped_at_max_frame_delta() {
        let mut scheduler = scheduler();

        let steps = scheduler.advance(Duration::from_secs(1), || {});

        assert_eq!(steps, 6);
        assert!(scheduler.accumulator_secs() < STEP);
    }

    #[test]
    fn test_steps_match_elapsed_time_over_many_frames() {
        let mut scheduler = scheduler();
        let mut total = 0;

        for _ in 0..64 {
            total += scheduler.advance(Duration::from_secs_f64(STEP), || {});
        }

        assert_eq!(total, 64);
    }

    #[test]
    fn test_frame_rate_does_not_change_step_count() {
        let mut fast = scheduler();
        let mut slow = scheduler();
        let mut fast_total = 0;
        let mut slow_total = 0;

        for _ in 0..32 {
            fast_total += fast.advance(Duration::from_secs_f64(STEP / 2.0), || {});
        }
        for _ in 0..4 {
            slow_total += slow.advance(Duration::from_secs_f64(STEP * 4.0), || {});
        }

        assert_eq!(fast_total, 16);
        assert_eq!(slow_total, 16);
    }

    #[test]
    fn test_non_positive_timestep_never_steps() {
        let mut scheduler = FixedStepScheduler::new(0.0, 0.1);

        assert_eq!(scheduler.advance(Duration::from_secs(1), || {}), 0);
    }

    #[test]
    fn test_reset_drops_banked_time() {
        let mut scheduler = scheduler();
        scheduler.advance(Duration::from_millis(10), || {});

        scheduler.reset();

        assert_eq!(scheduler.accumulator_secs(), 0.0);
    }
}

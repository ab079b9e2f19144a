use std::time::Duration;

use thiserror::Error;
use tracing::trace;

use crate::config::SimConfig;
use crate::controllers::simulation::scheduler::FixedStepScheduler;
use crate::controllers::simulation::viewport::Viewport;
use crate::core::data::vec2::Vec2;
use crate::core::data::world_bounds::WorldBounds;
use crate::core::flight::{
    Airplane, FlightControlsSnapshot, FlightStatus, FlightTuning, step_flight,
};
use crate::core::trajectory::{
    TrailLimits, TrailScenePort, TrailUpdate, TrajectoryError, TrajectoryManager,
};
use crate::core::validation::InvalidParameter;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] InvalidParameter),
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

/// Result of one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub steps_run: u32,
    /// Whether any physics step in this frame wrapped the airplane.
    pub wrapped: bool,
    pub trail: TrailUpdate,
    pub status: FlightStatus,
}

/// Owns the airplane and drives physics and the trail once per frame.
///
/// Physics runs zero or more fixed steps per frame; the trail samples the
/// airplane once, after the last step.
#[derive(Debug)]
pub struct FlightSimulator<S: TrailScenePort> {
    airplane: Airplane,
    tuning: FlightTuning,
    trail_limits: TrailLimits,
    bounds: WorldBounds,
    scheduler: FixedStepScheduler,
    trajectory: TrajectoryManager<S>,
}

impl<S: TrailScenePort> FlightSimulator<S> {
    pub fn new(config: &SimConfig, viewport: &Viewport, scene: S) -> Result<Self, SimulationError> {
        config.validate()?;

        let start = Vec2::ZERO;
        let mut material = config.display.trail;
        material.resolution = [viewport.width(), viewport.height()];

        let trajectory = TrajectoryManager::new(start, config.trail, material, scene)?;

        Ok(Self {
            airplane: Airplane::new(start, &config.flight),
            tuning: config.flight,
            trail_limits: config.trail,
            bounds: viewport.world_bounds(),
            scheduler: FixedStepScheduler::from_tuning(&config.flight),
            trajectory,
        })
    }

    /// Runs the physics steps `elapsed` pays for, then samples the trail.
    ///
    /// Trail faults are recovered internally; `Err` means the trail could not
    /// be rebuilt at all.
    pub fn advance_frame(
        &mut self,
        elapsed: Duration,
        controls: FlightControlsSnapshot,
    ) -> Result<FrameReport, TrajectoryError> {
        let airplane = &mut self.airplane;
        let bounds = &self.bounds;
        let tuning = &self.tuning;
        let mut wrapped = false;

        let steps_run = self.scheduler.advance(elapsed, || {
            let report = step_flight(airplane, controls, bounds, tuning);
            wrapped |= report.wrapped;
        });

        let trail = self.trajectory.update(
            self.airplane.pose.position,
            &self.bounds,
            self.trail_limits.min_distance,
        )?;

        trace!(steps_run, wrapped, ?trail, "frame advanced");

        Ok(FrameReport {
            steps_run,
            wrapped,
            trail,
            status: self.status(),
        })
    }

    /// Pushes new bounds to physics and the trail, and the new size to the
    /// trail material.
    pub fn apply_viewport(&mut self, viewport: &Viewport) {
        self.bounds = viewport.world_bounds();
        self.trajectory
            .update_resolution(viewport.width(), viewport.height());
    }

    #[must_use]
    pub fn status(&self) -> FlightStatus {
        FlightStatus::from(&self.airplane)
    }

    #[must_use]
    pub fn airplane(&self) -> &Airplane {
        &self.airplane
    }

    #[must_use]
    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    #[must_use]
    pub fn tuning(&self) -> &FlightTuning {
        &self.tuning
    }

    #[must_use]
    pub fn trajectory(&self) -> &TrajectoryManager<S> {
        &self.trajectory
    }

    pub fn trajectory_mut(&mut self) -> &mut TrajectoryManager<S> {
        &mut self.trajectory
    }

    /// Releases the trail. The simulator can keep running and reseeds it.
    pub fn shutdown(&mut self) {
        self.trajectory.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trajectory::DetachedScene;

    fn simulator(config: SimConfig) -> FlightSimulator<DetachedScene> {
        let viewport = Viewport::new(800, 600, config.world.frustum_size);
        FlightSimulator::new(&config, &viewport, DetachedScene).unwrap()
    }

    fn sixty_hz() -> Duration {
        Duration::from_secs_f64(1.0 / 60.0)
    }

    #[test]
    fn test_new_simulator_starts_at_origin_with_seeded_trail() {
        let simulator = simulator(SimConfig::default());

        assert_eq!(simulator.airplane().pose.position, Vec2::ZERO);
        assert_eq!(simulator.trajectory().segment_count(), 1);
        assert_eq!(simulator.trajectory().material().resolution, [800, 600]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SimConfig::default();
        config.flight.aircraft_mass = -1.0;
        let viewport = Viewport::new(800, 600, 50.0);

        let result = FlightSimulator::new(&config, &viewport, DetachedScene);

        assert!(matches!(result, Err(SimulationError::Config(_))));
    }

    #[test]
    fn test_stalled_frame_runs_a_bounded_number_of_steps() {
        let mut simulator = simulator(SimConfig::default());

        let report = simulator
            .advance_frame(Duration::from_secs(5), FlightControlsSnapshot::default())
            .unwrap();

        assert!(report.steps_run <= 6);
        assert!(report.steps_run >= 5);
    }

    #[test]
    fn test_default_airplane_moves_forward_along_x() {
        let mut simulator = simulator(SimConfig::default());

        for _ in 0..30 {
            simulator
                .advance_frame(sixty_hz(), FlightControlsSnapshot::default())
                .unwrap();
        }

        let position = simulator.airplane().pose.position;
        assert!(position.x > 0.5);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn test_trail_follows_the_airplane() {
        let mut simulator = simulator(SimConfig::default());

        for _ in 0..120 {
            simulator
                .advance_frame(sixty_hz(), FlightControlsSnapshot::default())
                .unwrap();
        }

        let trajectory = simulator.trajectory();
        assert!(trajectory.total_points() > 2);
        let last = trajectory.last_position().unwrap();
        let airplane = simulator.airplane().pose.position;
        assert!(last.distance_to(airplane) < trajectory.limits().min_distance);
    }

    #[test]
    fn test_viewport_resize_updates_bounds_and_material() {
        let mut simulator = simulator(SimConfig::default());
        let viewport = Viewport::new(1000, 500, 50.0);

        simulator.apply_viewport(&viewport);

        assert_eq!(simulator.bounds().right, 50.0);
        assert_eq!(simulator.trajectory().material().resolution, [1000, 500]);
    }

    #[test]
    fn test_shutdown_disposes_trail_and_next_frame_reseeds() {
        let mut simulator = simulator(SimConfig::default());

        simulator.shutdown();
        assert_eq!(simulator.trajectory().segment_count(), 0);

        let report = simulator
            .advance_frame(sixty_hz(), FlightControlsSnapshot::default())
            .unwrap();
        assert_eq!(report.trail, TrailUpdate::Seeded);
    }
}

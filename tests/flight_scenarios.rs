use std::collections::BTreeMap;
use std::time::Duration;

use approx::assert_relative_eq;
use flight_trail::config::SimConfig;
use flight_trail::controllers::simulation::{FlightSimulator, Viewport};
use flight_trail::core::data::vec2::Vec2;
use flight_trail::core::data::world_bounds::WorldBounds;
use flight_trail::core::flight::FlightControlsSnapshot;
use flight_trail::core::trajectory::{
    DetachedScene, LineGeometry, LineMaterial, SceneError, SegmentId, TrailFault, TrailLimits,
    TrailScenePort, TrailUpdate, TrajectoryManager,
};
use flight_trail::{AutopilotController, PpmFilePresenter, default_flight_plan};

/// Mirrors what a renderer would hold: one entry per live line.
#[derive(Debug, Default)]
struct MirrorScene {
    lines: BTreeMap<SegmentId, usize>,
}

impl TrailScenePort for MirrorScene {
    fn add_line(&mut self, id: SegmentId, geometry: &LineGeometry) -> Result<(), SceneError> {
        self.lines.insert(id, geometry.point_count());
        Ok(())
    }

    fn update_line(&mut self, id: SegmentId, geometry: &LineGeometry) -> Result<(), SceneError> {
        match self.lines.get_mut(&id) {
            Some(count) => {
                *count = geometry.point_count();
                Ok(())
            }
            None => Err(SceneError::UnknownLine(id)),
        }
    }

    fn remove_line(&mut self, id: SegmentId) {
        self.lines.remove(&id);
    }
}

fn frame() -> Duration {
    Duration::from_secs_f64(1.0 / 60.0)
}

fn viewport(config: &SimConfig) -> Viewport {
    Viewport::new(800, 600, config.world.frustum_size)
}

#[test]
fn test_idle_airplane_with_no_thrust_floor_never_moves() {
    let mut config = SimConfig::default();
    config.flight.initial_throttle = 0.0;
    config.flight.initial_speed = 0.0;
    config.flight.min_thrust_percent = 0.0;
    let mut simulator = FlightSimulator::new(&config, &viewport(&config), DetachedScene).unwrap();

    for _ in 0..600 {
        let report = simulator
            .advance_frame(frame(), FlightControlsSnapshot::default())
            .unwrap();
        assert_eq!(report.trail, TrailUpdate::Skipped);
    }

    assert_eq!(simulator.airplane().pose.position, Vec2::ZERO);
    assert_eq!(simulator.status().speed, 0.0);
    assert_eq!(simulator.trajectory().segment_count(), 1);
}

#[test]
fn test_held_throttle_settles_at_terminal_speed() {
    let config = SimConfig::default();
    let terminal = config.flight.full_thrust_terminal_speed();
    let mut simulator = FlightSimulator::new(&config, &viewport(&config), DetachedScene).unwrap();
    let throttle_up = FlightControlsSnapshot {
        throttle_up: true,
        ..Default::default()
    };

    for _ in 0..20_000 {
        simulator.advance_frame(frame(), throttle_up).unwrap();
    }

    let status = simulator.status();
    assert_eq!(status.throttle, config.flight.max_throttle);
    assert_relative_eq!(status.speed, terminal, max_relative = 0.02);
}

#[test]
fn test_crossing_the_right_edge_starts_a_new_segment_on_the_left() {
    let mut config = SimConfig::default();
    config.flight.engine_power = 0.0;
    config.flight.drag_coefficient = 0.0;
    config.flight.initial_speed = 1.0;
    let mut simulator = FlightSimulator::new(&config, &viewport(&config), DetachedScene).unwrap();
    let left = simulator.bounds().left;

    let mut wrap_frames = Vec::new();
    for index in 0..60 {
        let report = simulator
            .advance_frame(frame(), FlightControlsSnapshot::default())
            .unwrap();
        if report.wrapped {
            assert_eq!(report.trail, TrailUpdate::Wrapped);
            wrap_frames.push(index);
        }
    }

    assert_eq!(wrap_frames.len(), 1);
    let trajectory = simulator.trajectory();
    assert_eq!(trajectory.segment_count(), 2);

    let newest = trajectory.segments().last().unwrap();
    let (first_x, first_y) = newest.geometry().vertices().next().unwrap();
    assert_relative_eq!(f64::from(first_x), left, max_relative = 1e-6);
    assert_eq!(first_y, 0.0);
}

#[test]
fn test_scene_tracks_every_live_segment_through_a_long_turning_flight() {
    let mut config = SimConfig::default();
    config.trail = TrailLimits {
        max_points: 60,
        max_segments: 3,
        ..Default::default()
    };
    let mut simulator =
        FlightSimulator::new(&config, &viewport(&config), MirrorScene::default()).unwrap();
    let banking = FlightControlsSnapshot {
        throttle_up: true,
        rudder_left: true,
        ..Default::default()
    };

    for index in 0..3_000 {
        let controls = if (index / 400) % 2 == 0 {
            banking
        } else {
            FlightControlsSnapshot {
                throttle_up: true,
                ..Default::default()
            }
        };
        simulator.advance_frame(frame(), controls).unwrap();

        let trajectory = simulator.trajectory();
        let live: BTreeMap<SegmentId, usize> = trajectory
            .segments()
            .map(|segment| (segment.id(), segment.len()))
            .collect();

        assert_eq!(trajectory.scene().lines, live);
        assert!(trajectory.total_points() <= 60);
        assert!(trajectory.segment_count() <= 3);
        assert!(trajectory.segments().all(|segment| segment.len() >= 2));
    }

    assert_eq!(simulator.trajectory().recoveries(), 0);
}

#[test]
fn test_non_finite_sample_resets_the_trail_at_the_last_good_position() {
    let bounds = WorldBounds::from_frustum(50.0, 4.0 / 3.0);
    let mut manager = TrajectoryManager::new(
        Vec2::ZERO,
        TrailLimits::default(),
        LineMaterial::default(),
        MirrorScene::default(),
    )
    .unwrap();
    manager.update(Vec2::new(1.0, 0.0), &bounds, 0.25).unwrap();
    manager.update(Vec2::new(2.0, 0.0), &bounds, 0.25).unwrap();

    let outcome = manager
        .update(Vec2::new(f64::NAN, 0.0), &bounds, 0.25)
        .unwrap();

    assert!(matches!(
        outcome,
        TrailUpdate::Recovered(TrailFault::NonFinitePosition { .. })
    ));
    assert_eq!(manager.recoveries(), 1);
    assert_eq!(manager.segment_count(), 1);
    assert_eq!(manager.scene().lines.len(), 1);

    let next = manager.update(Vec2::new(3.0, 0.0), &bounds, 0.25).unwrap();
    assert_eq!(next, TrailUpdate::Extended);
}

#[test]
fn test_config_file_drives_a_scripted_flight() {
    let path = std::env::temp_dir().join(format!(
        "flight_trail_scenario_{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{
            "world": { "window_width": 120, "window_height": 80 },
            "trail": { "max_points": 40, "max_segments": 4 }
        }"#,
    )
    .unwrap();

    let config = SimConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut controller = AutopilotController::new(PpmFilePresenter::new(), config);
    let summary = controller.fly(&default_flight_plan()).unwrap();

    assert!(summary.points <= 40);
    assert!(summary.segments <= 4);

    let image = std::env::temp_dir().join(format!(
        "flight_trail_scenario_{}.ppm",
        std::process::id()
    ));
    controller.write(&image).unwrap();
    let bytes = std::fs::read(&image).unwrap();
    std::fs::remove_file(&image).unwrap();

    assert!(bytes.starts_with(b"P6\n120 80\n255\n"));
    assert_eq!(bytes.len(), b"P6\n120 80\n255\n".len() + 120 * 80 * 3);
}

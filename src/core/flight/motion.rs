use crate::core::data::vec2::Vec2;
use crate::core::data::world_bounds::WorldBounds;
use crate::core::flight::controls::FlightControlsSnapshot;
use crate::core::flight::engine::compute_thrust;
use crate::core::flight::params::{RudderParams, SpeedParams};
use crate::core::flight::pose::Pose;
use crate::core::flight::tuning::FlightTuning;

/// Everything the integrator mutates for the single airplane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airplane {
    pub pose: Pose,
    pub speed: SpeedParams,
    pub rudder: RudderParams,
}

impl Airplane {
    #[must_use]
    pub fn new(start: Vec2, tuning: &FlightTuning) -> Self {
        Self {
            pose: Pose::new(start, 0.0),
            speed: SpeedParams::new(tuning),
            rudder: RudderParams::new(tuning),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightStepReport {
    pub thrust_force: f64,
    pub drag_force: f64,
    pub speed_update_skipped: bool,
    pub turn_rate: f64,
    pub wrapped: bool,
}

/// Advances the airplane by one fixed physics tick.
pub fn step_flight(
    airplane: &mut Airplane,
    controls: FlightControlsSnapshot,
    bounds: &WorldBounds,
    tuning: &FlightTuning,
) -> FlightStepReport {
    let mut report = FlightStepReport::default();

    update_throttle(&mut airplane.speed, controls, tuning);
    update_rudder(&mut airplane.rudder, controls, tuning);
    update_speed(&mut airplane.speed, tuning, &mut report);

    report.turn_rate = turn_rate(
        airplane.rudder.deflection_angle,
        airplane.speed.speed,
        tuning,
    );
    airplane.pose.heading =
        stabilize_angle(airplane.pose.heading + report.turn_rate, tuning.angle_epsilon);

    let moved = airplane.pose.position + airplane.pose.forward() * airplane.speed.speed;
    let (wrapped_position, wrapped) = bounds.wrap(moved);
    airplane.pose.position = wrapped_position;
    report.wrapped = wrapped;

    report
}

fn update_throttle(speed: &mut SpeedParams, controls: FlightControlsSnapshot, tuning: &FlightTuning) {
    let axis = controls.throttle_axis();
    if axis > 0.0 {
        speed.throttle = (speed.throttle + speed.throttle_step).min(tuning.max_throttle);
    } else if axis < 0.0 {
        speed.throttle = (speed.throttle - speed.throttle_step).max(tuning.min_throttle);
    }
}

fn update_rudder(rudder: &mut RudderParams, controls: FlightControlsSnapshot, tuning: &FlightTuning) {
    let axis = controls.rudder_axis();
    if axis > 0.0 {
        rudder.deflection_angle =
            (rudder.deflection_angle + rudder.sensitivity).min(rudder.max_deflection);
    } else if axis < 0.0 {
        rudder.deflection_angle =
            (rudder.deflection_angle - rudder.sensitivity).max(-rudder.max_deflection);
    } else {
        rudder.deflection_angle *= tuning.rudder_return_factor;
    }
}

fn update_speed(speed: &mut SpeedParams, tuning: &FlightTuning, report: &mut FlightStepReport) {
    let thrust = compute_thrust(speed.throttle, &mut speed.engine, tuning);
    let drag = drag_force(speed.speed, tuning.drag_coefficient);

    report.thrust_force = thrust;
    report.drag_force = drag;

    let acceleration = (thrust + drag) / tuning.aircraft_mass;
    let delta_v = acceleration * tuning.dt() * tuning.force_scaling_factor;

    // 0/0 and x/0 compare false, so a stationary airplane always updates.
    let percent_change = (100.0 * delta_v / speed.speed).abs();
    if percent_change < tuning.speed_deadband_percent {
        report.speed_update_skipped = true;
        return;
    }

    speed.speed = (speed.speed + delta_v).max(0.0);
}

/// Quadratic drag, always opposing the direction of travel.
#[must_use]
pub fn drag_force(speed: f64, drag_coefficient: f64) -> f64 {
    -drag_coefficient * speed * speed.abs()
}

/// Heading change per tick for a rudder deflection at a given speed.
///
/// Authority grows with the square root of speed but is floored at
/// `rudder_effectiveness` so a slow airplane can still turn.
#[must_use]
pub fn turn_rate(deflection: f64, speed: f64, tuning: &FlightTuning) -> f64 {
    let effectiveness = tuning.rudder_effectiveness;
    let speed_factor = effectiveness.max(speed.max(0.0).sqrt() * 1.2);
    let base_turn_rate = deflection * (effectiveness / 3.0);

    base_turn_rate / speed_factor
}

#[must_use]
pub fn stabilize_angle(angle: f64, epsilon: f64) -> f64 {
    if angle.abs() < epsilon { 0.0 } else { angle }
}

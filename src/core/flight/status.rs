use crate::core::data::vec2::Vec2;
use crate::core::flight::motion::Airplane;

/// Read-only view of the airplane for gauges and presenters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightStatus {
    pub speed: f64,
    pub throttle: f64,
    pub last_thrust: f64,
    pub engine_rpm: f64,
    pub rudder_deflection: f64,
    pub position: Vec2,
    pub heading: f64,
}

impl From<&Airplane> for FlightStatus {
    fn from(airplane: &Airplane) -> Self {
        Self {
            speed: airplane.speed.speed,
            throttle: airplane.speed.throttle,
            last_thrust: airplane.speed.engine.last_thrust,
            engine_rpm: airplane.speed.engine.current_rpm,
            rudder_deflection: airplane.rudder.deflection_angle,
            position: airplane.pose.position,
            heading: airplane.pose.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlightStatus;
    use crate::core::data::vec2::Vec2;
    use crate::core::flight::motion::Airplane;
    use crate::core::flight::tuning::FlightTuning;

    #[test]
    fn test_status_mirrors_airplane_state() {
        let tuning = FlightTuning::default();
        let mut airplane = Airplane::new(Vec2::new(3.0, 4.0), &tuning);
        airplane.rudder.deflection_angle = -0.2;
        airplane.pose.heading = 1.0;

        let status = FlightStatus::from(&airplane);

        assert_eq!(status.speed, tuning.initial_speed);
        assert_eq!(status.throttle, tuning.initial_throttle);
        assert_eq!(status.last_thrust, tuning.min_thrust_percent);
        assert_eq!(status.rudder_deflection, -0.2);
        assert_eq!(status.position, Vec2::new(3.0, 4.0));
        assert_eq!(status.heading, 1.0);
    }
}

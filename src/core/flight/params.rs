use crate::core::flight::engine::EngineState;
use crate::core::flight::tuning::FlightTuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedParams {
    pub speed: f64,
    pub throttle: f64,
    pub throttle_step: f64,
    pub engine: EngineState,
}

impl SpeedParams {
    #[must_use]
    pub fn new(tuning: &FlightTuning) -> Self {
        Self {
            speed: tuning.initial_speed,
            throttle: tuning.initial_throttle,
            throttle_step: tuning.throttle_step,
            engine: EngineState::spooled_to(tuning.initial_throttle, tuning),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RudderParams {
    pub deflection_angle: f64,
    pub max_deflection: f64,
    pub sensitivity: f64,
}

impl RudderParams {
    #[must_use]
    pub fn new(tuning: &FlightTuning) -> Self {
        Self {
            deflection_angle: 0.0,
            max_deflection: tuning.rudder_max_deflection,
            sensitivity: tuning.rudder_sensitivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_params_start_from_tuning() {
        let tuning = FlightTuning::default();
        let params = SpeedParams::new(&tuning);

        assert_eq!(params.speed, tuning.initial_speed);
        assert_eq!(params.throttle, tuning.initial_throttle);
        assert_eq!(params.throttle_step, tuning.throttle_step);
        assert_eq!(
            params.engine.current_rpm,
            tuning.initial_throttle * tuning.rpm_scale
        );
    }

    #[test]
    fn test_rudder_starts_neutral() {
        let tuning = FlightTuning::default();
        let rudder = RudderParams::new(&tuning);

        assert_eq!(rudder.deflection_angle, 0.0);
        assert_eq!(rudder.max_deflection, tuning.rudder_max_deflection);
        assert_eq!(rudder.sensitivity, tuning.rudder_sensitivity);
    }
}

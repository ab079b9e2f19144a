use std::f64::consts::FRAC_PI_6;

use serde::{Deserialize, Serialize};

use crate::core::validation::{InvalidParameter, ensure_non_negative, ensure_positive};

/// Physics constants for the airplane and the fixed-step loop.
///
/// Speeds are in world units per physics tick, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    pub physics_timestep_secs: f64,
    pub max_frame_delta_secs: f64,

    pub rpm_scale: f64,
    pub engine_accel_response_time: f64,
    pub engine_decel_response_time: f64,
    pub min_thrust_percent: f64,
    pub power_exponent: f64,
    pub engine_power: f64,

    pub drag_coefficient: f64,
    pub aircraft_mass: f64,
    pub force_scaling_factor: f64,
    pub speed_deadband_percent: f64,

    pub min_throttle: f64,
    pub max_throttle: f64,
    pub throttle_step: f64,
    pub initial_throttle: f64,
    pub initial_speed: f64,

    pub rudder_max_deflection: f64,
    pub rudder_sensitivity: f64,
    pub rudder_return_factor: f64,
    pub rudder_effectiveness: f64,

    pub angle_epsilon: f64,
}

impl FlightTuning {
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.physics_timestep_secs
    }

    /// Terminal speed at full thrust, where thrust force equals drag force.
    #[must_use]
    pub fn full_thrust_terminal_speed(&self) -> f64 {
        let max_thrust = self.engine_power * 10.0;
        (max_thrust / self.drag_coefficient).sqrt()
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        ensure_positive("physics_timestep_secs", self.physics_timestep_secs)?;
        ensure_positive("max_frame_delta_secs", self.max_frame_delta_secs)?;
        ensure_positive("rpm_scale", self.rpm_scale)?;
        ensure_positive("engine_accel_response_time", self.engine_accel_response_time)?;
        ensure_positive("engine_decel_response_time", self.engine_decel_response_time)?;
        ensure_non_negative("min_thrust_percent", self.min_thrust_percent)?;
        ensure_positive("power_exponent", self.power_exponent)?;
        ensure_non_negative("engine_power", self.engine_power)?;
        ensure_non_negative("drag_coefficient", self.drag_coefficient)?;
        ensure_positive("aircraft_mass", self.aircraft_mass)?;
        ensure_positive("force_scaling_factor", self.force_scaling_factor)?;
        ensure_non_negative("speed_deadband_percent", self.speed_deadband_percent)?;
        ensure_non_negative("throttle_step", self.throttle_step)?;
        ensure_non_negative("initial_speed", self.initial_speed)?;
        ensure_non_negative("rudder_max_deflection", self.rudder_max_deflection)?;
        ensure_non_negative("rudder_sensitivity", self.rudder_sensitivity)?;
        ensure_positive("rudder_effectiveness", self.rudder_effectiveness)?;
        ensure_non_negative("angle_epsilon", self.angle_epsilon)?;

        if self.min_thrust_percent > self.rpm_scale {
            return Err(InvalidParameter::new(
                "min_thrust_percent",
                "must not exceed rpm_scale",
            ));
        }

        if !(0.0..=1.0).contains(&self.min_throttle)
            || !(0.0..=1.0).contains(&self.max_throttle)
            || self.min_throttle > self.max_throttle
        {
            return Err(InvalidParameter::new(
                "max_throttle",
                "throttle limits must satisfy 0 <= min_throttle <= max_throttle <= 1",
            ));
        }

        if !(self.min_throttle..=self.max_throttle).contains(&self.initial_throttle) {
            return Err(InvalidParameter::new(
                "initial_throttle",
                "must lie within the throttle limits",
            ));
        }

        if !(0.0..1.0).contains(&self.rudder_return_factor) {
            return Err(InvalidParameter::new(
                "rudder_return_factor",
                "must be in [0, 1)",
            ));
        }

        Ok(())
    }
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            physics_timestep_secs: 1.0 / 60.0,
            max_frame_delta_secs: 0.1,

            rpm_scale: 100.0,
            engine_accel_response_time: 1.5,
            engine_decel_response_time: 3.0,
            min_thrust_percent: 5.0,
            power_exponent: 1.5,
            engine_power: 0.5,

            drag_coefficient: 200.0,
            aircraft_mass: 10.0,
            force_scaling_factor: 1.0,
            speed_deadband_percent: 0.1,

            min_throttle: 0.0,
            max_throttle: 1.0,
            throttle_step: 0.01,
            initial_throttle: 0.3,
            initial_speed: 0.05,

            rudder_max_deflection: FRAC_PI_6,
            rudder_sensitivity: 0.02,
            rudder_return_factor: 0.9,
            rudder_effectiveness: 0.1,

            angle_epsilon: 1e-10,
        }
    }
}

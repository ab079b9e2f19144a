use crate::core::flight::tuning::FlightTuning;

/// Spool state of the single engine.
///
/// `current_rpm` stays within `[0, rpm_scale]`; `last_thrust` holds the most
/// recent thrust percent for the gauges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
    pub current_rpm: f64,
    pub target_rpm: f64,
    pub last_thrust: f64,
}

impl EngineState {
    /// An engine already spooled to `throttle`.
    #[must_use]
    pub fn spooled_to(throttle: f64, tuning: &FlightTuning) -> Self {
        let rpm = throttle * tuning.rpm_scale;

        Self {
            current_rpm: rpm,
            target_rpm: rpm,
            last_thrust: tuning.min_thrust_percent,
        }
    }

    #[must_use]
    pub fn normalized_rpm(&self, tuning: &FlightTuning) -> f64 {
        self.current_rpm / tuning.rpm_scale
    }
}

/// Advances the RPM lag by one physics step and returns the thrust force.
///
/// The engine spools up with the acceleration response time and down with
/// the (slower) deceleration response time; thrust follows a power curve of
/// normalized RPM with an idle floor of `min_thrust_percent`.
pub fn compute_thrust(throttle: f64, state: &mut EngineState, tuning: &FlightTuning) -> f64 {
    let rpm_scale = tuning.rpm_scale;
    let target_rpm = throttle * rpm_scale;

    let response_time = if throttle > state.current_rpm / rpm_scale {
        tuning.engine_accel_response_time
    } else {
        tuning.engine_decel_response_time
    };

    let rpm_delta =
        (target_rpm - state.current_rpm) * (1.0 - (-tuning.dt() / response_time).exp());

    state.target_rpm = target_rpm;
    state.current_rpm = (state.current_rpm + rpm_delta).clamp(0.0, rpm_scale);

    let normalized_rpm = state.current_rpm / rpm_scale;
    let thrust_percent = tuning
        .min_thrust_percent
        .max(rpm_scale * normalized_rpm.powf(tuning.power_exponent));

    state.last_thrust = thrust_percent;

    (thrust_percent / rpm_scale) * tuning.engine_power * 10.0
}

use std::time::Duration;

use crate::core::flight::status::FlightStatus;

pub const CONTROLS_HELP: &str = "Controls:\n\u{2191}/\u{2193} - Throttle\n\u{2190}/\u{2192} - Rudder";

/// Human-readable gauge values derived from a [`FlightStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaugeReadout {
    pub airspeed_knots: f64,
    pub throttle_percent: f64,
    pub thrust_percent: f64,
    pub rudder_degrees: f64,
}

impl GaugeReadout {
    #[must_use]
    pub fn from_status(status: &FlightStatus, knots_conversion_factor: f64) -> Self {
        Self {
            airspeed_knots: speed_in_knots(status.speed, knots_conversion_factor),
            throttle_percent: status.throttle * 100.0,
            thrust_percent: status.last_thrust,
            rudder_degrees: status.rudder_deflection.to_degrees(),
        }
    }

    #[must_use]
    pub fn airspeed_text(&self) -> String {
        format!("Airspeed: {:.1} kts", self.airspeed_knots)
    }

    #[must_use]
    pub fn throttle_text(&self) -> String {
        format!("Throttle: {:.0}%", self.throttle_percent)
    }

    #[must_use]
    pub fn thrust_text(&self) -> String {
        format!("Thrust: {:.1}%", self.thrust_percent)
    }

    #[must_use]
    pub fn rudder_text(&self) -> String {
        format!("Rudder Deflection: {:.1}\u{b0}", self.rudder_degrees)
    }

    #[must_use]
    pub fn lines(&self) -> [String; 4] {
        [
            self.airspeed_text(),
            self.throttle_text(),
            self.thrust_text(),
            self.rudder_text(),
        ]
    }
}

fn speed_in_knots(speed: f64, knots_conversion_factor: f64) -> f64 {
    if speed == 0.0 || speed.is_nan() {
        return 0.0;
    }
    speed * knots_conversion_factor
}

/// Fires on a fixed wall-clock interval, independent of the physics rate.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeTicker {
    interval: Duration,
    since_last: Duration,
}

impl GaugeTicker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            since_last: Duration::ZERO,
        }
    }

    /// Returns `true` when the gauges are due for a refresh.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.since_last += elapsed;
        if self.since_last < self.interval {
            return false;
        }

        self.since_last = Duration::ZERO;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> FlightStatus {
        FlightStatus {
            speed: 0.05,
            throttle: 0.3,
            last_thrust: 16.43,
            rudder_deflection: std::f64::consts::FRAC_PI_6,
            ..FlightStatus::default()
        }
    }

    #[test]
    fn test_readout_formats_like_the_cockpit() {
        let readout = GaugeReadout::from_status(&status(), 1000.0);

        assert_eq!(
            readout.lines(),
            [
                "Airspeed: 50.0 kts".to_string(),
                "Throttle: 30%".to_string(),
                "Thrust: 16.4%".to_string(),
                "Rudder Deflection: 30.0\u{b0}".to_string(),
            ]
        );
    }

    #[test]
    fn test_nan_speed_reads_as_zero_knots() {
        let status = FlightStatus {
            speed: f64::NAN,
            ..FlightStatus::default()
        };

        let readout = GaugeReadout::from_status(&status, 1000.0);

        assert_eq!(readout.airspeed_text(), "Airspeed: 0.0 kts");
    }

    #[test]
    fn test_ticker_fires_once_per_interval() {
        let mut ticker = GaugeTicker::new(Duration::from_millis(100));
        let frame = Duration::from_millis(40);

        assert!(!ticker.tick(frame));
        assert!(!ticker.tick(frame));
        assert!(ticker.tick(frame));
        assert!(!ticker.tick(frame));
    }
}

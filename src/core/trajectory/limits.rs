use serde::{Deserialize, Serialize};

use crate::core::validation::{InvalidParameter, ensure_non_negative, ensure_positive};

/// Budget and sampling rules for the trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailLimits {
    /// Hard cap on points across every segment.
    pub max_points: usize,
    pub max_segments: usize,
    /// Minimum travel before a new point is recorded.
    pub min_distance: f64,
    /// Upper bound on the per-axis jump that counts as a wrap.
    pub wrap_threshold_cap: f64,
}

impl TrailLimits {
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        // A live segment holds at least two points and extending it needs a third.
        if self.max_points < 3 {
            return Err(InvalidParameter::new(
                "max_points",
                format!("must be at least 3, got {}", self.max_points),
            ));
        }

        if self.max_segments == 0 {
            return Err(InvalidParameter::new("max_segments", "must be at least 1"));
        }

        ensure_non_negative("min_distance", self.min_distance)?;
        ensure_positive("wrap_threshold_cap", self.wrap_threshold_cap)?;

        Ok(())
    }
}

impl Default for TrailLimits {
    fn default() -> Self {
        Self {
            max_points: 1000,
            max_segments: 50,
            min_distance: 0.25,
            wrap_threshold_cap: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrailLimits;

    #[test]
    fn test_default_limits_are_valid() {
        assert_eq!(TrailLimits::default().validate(), Ok(()));
    }

    #[test]
    fn test_two_point_budget_is_rejected() {
        let limits = TrailLimits {
            max_points: 2,
            ..TrailLimits::default()
        };

        assert_eq!(limits.validate().unwrap_err().field, "max_points");
    }

    #[test]
    fn test_zero_segments_is_rejected() {
        let limits = TrailLimits {
            max_segments: 0,
            ..TrailLimits::default()
        };

        assert_eq!(limits.validate().unwrap_err().field, "max_segments");
    }

    #[test]
    fn test_negative_min_distance_is_rejected() {
        let limits = TrailLimits {
            min_distance: -1.0,
            ..TrailLimits::default()
        };

        assert!(limits.validate().is_err());
    }
}

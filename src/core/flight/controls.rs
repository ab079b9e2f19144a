/// Held state of the four flight inputs, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightControlsSnapshot {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub rudder_left: bool,
    pub rudder_right: bool,
}

impl FlightControlsSnapshot {
    /// +1 for throttle up only, -1 for throttle down only, 0 otherwise.
    #[must_use]
    pub fn throttle_axis(&self) -> f64 {
        axis_from_pair(self.throttle_up, self.throttle_down)
    }

    /// +1 for left rudder only, -1 for right rudder only, 0 otherwise.
    #[must_use]
    pub fn rudder_axis(&self) -> f64 {
        axis_from_pair(self.rudder_left, self.rudder_right)
    }

    #[must_use]
    pub fn any_active(&self) -> bool {
        self.throttle_up || self.throttle_down || self.rudder_left || self.rudder_right
    }
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

use crate::core::data::vec2::Vec2;

/// Position and heading of the airplane in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec2,
    /// Radians about the view axis, 0 pointing along +x.
    pub heading: f64,
}

impl Pose {
    #[must_use]
    pub const fn new(position: Vec2, heading: f64) -> Self {
        Self { position, heading }
    }

    #[must_use]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_heading(self.heading)
    }
}

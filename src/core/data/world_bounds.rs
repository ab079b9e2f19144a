use crate::core::data::vec2::Vec2;

/// Axis-aligned world rectangle in which the airplane flies.
///
/// `top` is the largest y value and `bottom` the smallest; the world is a
/// torus, so leaving through one edge re-enters through the opposite one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl WorldBounds {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Bounds of an orthographic view with a fixed vertical extent.
    #[must_use]
    pub fn from_frustum(frustum_size: f64, aspect_ratio: f64) -> Self {
        let half_width = frustum_size * aspect_ratio / 2.0;
        let half_height = frustum_size / 2.0;

        Self {
            left: -half_width,
            right: half_width,
            top: half_height,
            bottom: -half_height,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }

    /// Teleports a point that left the rectangle to the opposite edge.
    ///
    /// Returns the wrapped point and whether any axis wrapped. Points exactly
    /// on an edge are inside and are left alone.
    #[must_use]
    pub fn wrap(&self, point: Vec2) -> (Vec2, bool) {
        let mut wrapped = point;

        if wrapped.x > self.right {
            wrapped.x = self.left;
        } else if wrapped.x < self.left {
            wrapped.x = self.right;
        }

        if wrapped.y > self.top {
            wrapped.y = self.bottom;
        } else if wrapped.y < self.bottom {
            wrapped.y = self.top;
        }

        (wrapped, wrapped != point)
    }
}

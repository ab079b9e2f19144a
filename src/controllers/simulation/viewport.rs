use crate::core::data::vec2::Vec2;
use crate::core::data::world_bounds::WorldBounds;

/// Maps the fixed-height orthographic view onto a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    frustum_size: f64,
}

impl Viewport {
    /// Zero dimensions are raised to one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32, frustum_size: f64) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            frustum_size,
        }
    }

    /// Applies a window resize. Returns `false` and keeps the old size when
    /// either dimension is zero (minimized windows report 0x0).
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }

        self.width = width;
        self.height = height;
        true
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn frustum_size(&self) -> f64 {
        self.frustum_size
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::from_frustum(self.frustum_size, self.aspect_ratio())
    }

    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        f64::from(self.height) / self.frustum_size
    }

    /// World point to pixel coordinates, y pointing down.
    #[must_use]
    pub fn world_to_screen(&self, point: Vec2) -> (f64, f64) {
        let bounds = self.world_bounds();
        let scale = self.pixels_per_unit();

        ((point.x - bounds.left) * scale, (bounds.top - point.y) * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use crate::core::data::vec2::Vec2;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_follow_aspect_ratio() {
        let viewport = Viewport::new(1600, 800, 50.0);
        let bounds = viewport.world_bounds();

        assert_eq!(viewport.aspect_ratio(), 2.0);
        assert_eq!(bounds.top, 25.0);
        assert_eq!(bounds.bottom, -25.0);
        assert_eq!(bounds.left, -50.0);
        assert_eq!(bounds.right, 50.0);
    }

    #[test]
    fn test_zero_resize_is_ignored() {
        let mut viewport = Viewport::new(800, 600, 50.0);

        assert!(!viewport.resize(0, 600));
        assert!(!viewport.resize(800, 0));
        assert_eq!((viewport.width(), viewport.height()), (800, 600));

        assert!(viewport.resize(1024, 768));
        assert_eq!((viewport.width(), viewport.height()), (1024, 768));
    }

    #[test]
    fn test_origin_maps_to_screen_centre() {
        let viewport = Viewport::new(800, 600, 50.0);

        let (x, y) = viewport.world_to_screen(Vec2::ZERO);

        assert_relative_eq!(x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_top_left_corner_maps_to_pixel_origin() {
        let viewport = Viewport::new(800, 600, 50.0);
        let bounds = viewport.world_bounds();

        let (x, y) = viewport.world_to_screen(Vec2::new(bounds.left, bounds.top));

        assert_relative_eq!(x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(y, 0.0, epsilon = 1e-9);
    }
}

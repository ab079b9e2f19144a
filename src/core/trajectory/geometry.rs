use serde::{Deserialize, Serialize};

use crate::core::data::vec2::Vec2;
use crate::core::trajectory::errors::GeometryError;

/// Render-ready polyline: flattened `xyz` positions with `z = 0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineGeometry {
    positions: Vec<f32>,
    line_distances: Vec<f32>,
    visible: bool,
}

impl LineGeometry {
    /// Builds a visible line from at least two finite points.
    pub fn from_points<I>(points: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let points = points.into_iter();
        let mut positions = Vec::with_capacity(points.size_hint().0 * 3);
        let mut line_distances = Vec::with_capacity(points.size_hint().0);
        let mut previous: Option<Vec2> = None;
        let mut travelled = 0.0_f64;

        for (index, point) in points.enumerate() {
            if !point.is_finite() {
                return Err(GeometryError::NonFinitePoint { index });
            }

            if let Some(previous) = previous {
                travelled += previous.distance_to(point);
            }
            previous = Some(point);

            positions.extend_from_slice(&[point.x as f32, point.y as f32, 0.0]);
            line_distances.push(travelled as f32);
        }

        let count = line_distances.len();
        if count < 2 {
            return Err(GeometryError::TooFewPoints { count });
        }

        Ok(Self {
            positions,
            line_distances,
            visible: true,
        })
    }

    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Cumulative distance along the line at each vertex.
    #[must_use]
    pub fn line_distances(&self) -> &[f32] {
        &self.line_distances
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.line_distances.len()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// `(x, y)` of every vertex in order.
    pub fn vertices(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.positions.chunks_exact(3).map(|xyz| (xyz[0], xyz[1]))
    }
}

/// Shared appearance of every trail segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineMaterial {
    pub color: [u8; 3],
    pub line_width: f32,
    /// Display size in pixels; line width is resolved against it.
    pub resolution: [u32; 2],
}

impl Default for LineMaterial {
    fn default() -> Self {
        Self {
            color: [0xff, 0x00, 0x00],
            line_width: 3.0,
            resolution: [1280, 720],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_flattened_with_zero_z() {
        let geometry =
            LineGeometry::from_points([Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)]).unwrap();

        assert_eq!(geometry.positions(), &[1.0, 2.0, 0.0, 4.0, 6.0, 0.0]);
        assert_eq!(geometry.point_count(), 2);
        assert!(geometry.is_visible());
    }

    #[test]
    fn test_line_distances_accumulate() {
        let geometry = LineGeometry::from_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(3.0, 5.0),
        ])
        .unwrap();

        assert_eq!(geometry.line_distances(), &[0.0, 5.0, 5.0, 6.0]);
    }

    #[test]
    fn test_single_point_is_rejected() {
        let error = LineGeometry::from_points([Vec2::ZERO]).unwrap_err();

        assert_eq!(error, GeometryError::TooFewPoints { count: 1 });
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let error =
            LineGeometry::from_points([Vec2::ZERO, Vec2::new(f64::NAN, 0.0)]).unwrap_err();

        assert_eq!(error, GeometryError::NonFinitePoint { index: 1 });
    }

    #[test]
    fn test_vertices_drop_z() {
        let geometry =
            LineGeometry::from_points([Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]).unwrap();

        assert_eq!(geometry.vertices().collect::<Vec<_>>(), vec![(1.0, 2.0), (3.0, 4.0)]);
    }
}

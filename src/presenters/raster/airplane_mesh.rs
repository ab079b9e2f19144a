use crate::core::data::vec2::Vec2;
use crate::core::flight::pose::Pose;

/// Top-down airplane silhouette, nose along +x, in model units.
pub const AIRPLANE_VERTICES: [Vec2; 8] = [
    // nose
    Vec2::new(0.5, 0.0),
    // wings
    Vec2::new(-0.2, 0.4),
    Vec2::new(-0.1, 0.1),
    Vec2::new(-0.1, -0.1),
    Vec2::new(-0.2, -0.4),
    // tail
    Vec2::new(-0.4, 0.15),
    Vec2::new(-0.3, 0.0),
    Vec2::new(-0.4, -0.15),
];

pub const AIRPLANE_TRIANGLES: [[usize; 3]; 5] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 5, 6],
    [0, 6, 7],
];

/// Mesh vertices scaled, rotated to the pose heading and moved to its position.
#[must_use]
pub fn place_airplane(pose: &Pose, scale: f64) -> [Vec2; 8] {
    let (sin, cos) = pose.heading.sin_cos();

    AIRPLANE_VERTICES.map(|vertex| {
        let x = vertex.x * scale;
        let y = vertex.y * scale;
        pose.position + Vec2::new(x * cos - y * sin, x * sin + y * cos)
    })
}

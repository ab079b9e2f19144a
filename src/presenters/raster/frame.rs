use crate::config::DisplayConfig;
use crate::controllers::simulation::viewport::Viewport;
use crate::core::data::vec2::Vec2;
use crate::core::flight::pose::Pose;
use crate::core::trajectory::geometry::LineMaterial;
use crate::core::trajectory::segment::TrailSegment;
use crate::presenters::raster::airplane_mesh::{AIRPLANE_TRIANGLES, place_airplane};
use crate::presenters::raster::canvas::{Canvas, Rgba};

pub const BACKGROUND_TOP: Rgba = Rgba::from_hex(0x001833);
pub const BACKGROUND_BOTTOM: Rgba = Rgba::from_hex(0x000918);
pub const GRID_CENTRE: Rgba = Rgba::from_hex(0x444444);
pub const GRID_LINE: Rgba = Rgba::from_hex(0x222222);
pub const AIRPLANE: Rgba = Rgba::from_hex(0x4444ff);

const GRID_DIVISIONS: u32 = 20;
const OLDEST_TRAIL_ALPHA: f64 = 0.15;

/// Everything a frame needs from the simulation.
pub struct FrameScene<'a, I>
where
    I: Iterator<Item = &'a TrailSegment>,
{
    pub pose: Pose,
    pub segments: I,
    /// The trail manager's shared material.
    pub material: LineMaterial,
    pub frustum_size: f64,
}

/// Draws background, grid, trail and airplane, back to front.
pub fn render_frame<'a, I>(
    canvas: &mut Canvas<'_>,
    viewport: &Viewport,
    scene: FrameScene<'a, I>,
    display: &DisplayConfig,
) where
    I: Iterator<Item = &'a TrailSegment>,
{
    canvas.fill_vertical_gradient(BACKGROUND_TOP, BACKGROUND_BOTTOM);
    draw_grid(canvas, viewport, scene.frustum_size);
    draw_trail(canvas, viewport, scene.segments, &scene.material);
    draw_airplane(canvas, viewport, &scene.pose, display.airplane_scale);
}

/// Square grid twice the frustum wide, centred on the origin.
fn draw_grid(canvas: &mut Canvas<'_>, viewport: &Viewport, frustum_size: f64) {
    let half = frustum_size;
    let spacing = (frustum_size * 2.0) / f64::from(GRID_DIVISIONS);

    for i in 0..=GRID_DIVISIONS {
        let offset = -half + spacing * f64::from(i);
        let colour = if i == GRID_DIVISIONS / 2 {
            GRID_CENTRE
        } else {
            GRID_LINE
        };

        let vertical = (
            viewport.world_to_screen(Vec2::new(offset, -half)),
            viewport.world_to_screen(Vec2::new(offset, half)),
        );
        let horizontal = (
            viewport.world_to_screen(Vec2::new(-half, offset)),
            viewport.world_to_screen(Vec2::new(half, offset)),
        );

        canvas.draw_line(vertical.0, vertical.1, colour, 1);
        canvas.draw_line(horizontal.0, horizontal.1, colour, 1);
    }
}

/// Older trail points fade towards `OLDEST_TRAIL_ALPHA`.
fn draw_trail<'a, I>(
    canvas: &mut Canvas<'_>,
    viewport: &Viewport,
    segments: I,
    material: &LineMaterial,
) where
    I: Iterator<Item = &'a TrailSegment>,
{
    let segments: Vec<&TrailSegment> = segments
        .filter(|segment| segment.geometry().is_visible())
        .collect();
    let total: usize = segments.iter().map(|segment| segment.len()).sum();
    if total == 0 {
        return;
    }

    let colour = Rgba::new(material.color[0], material.color[1], material.color[2], 255);
    let thickness = material.line_width.round().max(1.0) as u32;
    let span = (total.saturating_sub(1)).max(1) as f64;
    let mut rank = 0usize;

    for segment in segments {
        let mut previous: Option<(f64, f64)> = None;

        for (x, y) in segment.geometry().vertices() {
            let screen = viewport.world_to_screen(Vec2::new(f64::from(x), f64::from(y)));
            let age = rank as f64 / span;
            let alpha = OLDEST_TRAIL_ALPHA + (1.0 - OLDEST_TRAIL_ALPHA) * age;

            if let Some(from) = previous {
                canvas.draw_line(from, screen, colour.with_alpha(alpha), thickness);
            }
            previous = Some(screen);
            rank += 1;
        }
    }
}

fn draw_airplane(canvas: &mut Canvas<'_>, viewport: &Viewport, pose: &Pose, scale: f64) {
    let placed = place_airplane(pose, scale).map(|vertex| viewport.world_to_screen(vertex));

    for [a, b, c] in AIRPLANE_TRIANGLES {
        canvas.fill_triangle([placed[a], placed[b], placed[c]], AIRPLANE);
    }
}

pub mod vec2;
pub mod world_bounds;

pub use vec2::Vec2;
pub use world_bounds::WorldBounds;

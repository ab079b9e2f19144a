pub mod arena;
pub mod errors;
pub mod geometry;
pub mod limits;
pub mod manager;
pub mod ports;
pub mod segment;

pub use errors::{GeometryError, SceneError, TrailFault, TrajectoryError};
pub use geometry::{LineGeometry, LineMaterial};
pub use limits::TrailLimits;
pub use manager::{TrailUpdate, TrajectoryManager, is_wrap_jump};
pub use ports::{DetachedScene, TrailScenePort};
pub use segment::{SegmentId, TrailSegment};

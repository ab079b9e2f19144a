use thiserror::Error;

use crate::core::trajectory::segment::SegmentId;
use crate::core::validation::InvalidParameter;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("scene rejected line {id}: {reason}")]
    Rejected { id: SegmentId, reason: String },
    #[error("scene has no line {0}")]
    UnknownLine(SegmentId),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a line needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },
    #[error("point {index} is not finite")]
    NonFinitePoint { index: usize },
}

/// A fault inside the trail that is handled by resetting the trail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrailFault {
    #[error("trail position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f64, y: f64 },
    #[error("point arena is full at {capacity} points")]
    ArenaFull { capacity: usize },
    #[error("{count} points are not owned by any segment")]
    OrphanedPoints { count: usize },
    #[error("newest segment no longer ends at the arena tail")]
    SegmentLost,
    #[error("geometry rebuild failed for segment {id}")]
    Geometry {
        id: SegmentId,
        #[source]
        source: GeometryError,
    },
    #[error("scene update failed")]
    Scene(#[from] SceneError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("invalid trail limits")]
    InvalidLimits(#[from] InvalidParameter),
    #[error("failed to create the initial trail segment")]
    Initialization(#[source] TrailFault),
    #[error("trail recovery failed after `{fault}`")]
    RecoveryFailed {
        fault: TrailFault,
        #[source]
        source: TrailFault,
    },
}

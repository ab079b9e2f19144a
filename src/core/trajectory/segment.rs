use std::fmt;

use crate::core::trajectory::geometry::LineGeometry;

/// Stable handle for one trail polyline in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A contiguous run of arena sequence numbers plus its built geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSegment {
    pub(crate) id: SegmentId,
    pub(crate) start: u64,
    pub(crate) len: usize,
    pub(crate) geometry: LineGeometry,
}

impl TrailSegment {
    #[must_use]
    pub fn id(&self) -> SegmentId {
        self.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last sequence number owned by this segment.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.start + self.len as u64
    }

    #[must_use]
    pub fn geometry(&self) -> &LineGeometry {
        &self.geometry
    }
}

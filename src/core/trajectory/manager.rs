use std::collections::VecDeque;

use tracing::{debug, error, info, warn};

use crate::core::data::vec2::Vec2;
use crate::core::data::world_bounds::WorldBounds;
use crate::core::trajectory::arena::PointArena;
use crate::core::trajectory::errors::{TrailFault, TrajectoryError};
use crate::core::trajectory::geometry::{LineGeometry, LineMaterial};
use crate::core::trajectory::limits::TrailLimits;
use crate::core::trajectory::ports::scene::TrailScenePort;
use crate::core::trajectory::segment::{SegmentId, TrailSegment};

/// What a call to [`TrajectoryManager::update`] did to the trail.
#[derive(Debug, Clone, PartialEq)]
pub enum TrailUpdate {
    /// The trail was empty and a segment was started.
    Seeded,
    /// The newest segment grew by one point.
    Extended,
    /// The position jumped across a world edge; a new segment was started.
    Wrapped,
    /// Too close to the last recorded position.
    Skipped,
    /// A fault was handled by resetting the trail to one fresh segment.
    Recovered(TrailFault),
}

/// Records the airplane path as segmented polylines under a point budget.
///
/// Points live in a ring-buffer arena; each segment owns a contiguous run of
/// sequence numbers, oldest segment first, so the front segment always starts
/// at the arena head and the back segment always ends at the arena tail.
///
/// Any fault resets the trail to a single segment at the last good position.
/// Only a failure of that reset reaches the caller.
#[derive(Debug)]
pub struct TrajectoryManager<S: TrailScenePort> {
    limits: TrailLimits,
    arena: PointArena,
    segments: VecDeque<TrailSegment>,
    material: LineMaterial,
    scene: S,
    last_position: Option<Vec2>,
    last_good_position: Vec2,
    next_segment_id: u64,
    recoveries: u64,
}

impl<S: TrailScenePort> TrajectoryManager<S> {
    pub fn new(
        start: Vec2,
        limits: TrailLimits,
        material: LineMaterial,
        scene: S,
    ) -> Result<Self, TrajectoryError> {
        limits.validate()?;

        let mut manager = Self {
            limits,
            arena: PointArena::with_capacity(limits.max_points),
            segments: VecDeque::with_capacity(limits.max_segments),
            material,
            scene,
            last_position: None,
            last_good_position: start,
            next_segment_id: 0,
            recoveries: 0,
        };

        manager.scene.update_material(&manager.material);
        manager
            .start_segment(start)
            .map_err(TrajectoryError::Initialization)?;

        Ok(manager)
    }

    /// Samples a new airplane position.
    ///
    /// Faults are logged and recovered from; `Err` means the recovery itself
    /// failed and the trail is left empty.
    pub fn update(
        &mut self,
        position: Vec2,
        bounds: &WorldBounds,
        min_distance: f64,
    ) -> Result<TrailUpdate, TrajectoryError> {
        match self.try_update(position, bounds, min_distance) {
            Ok(outcome) => Ok(outcome),
            Err(fault) => {
                warn!(%fault, "trail fault, resetting trail");
                self.recover(fault)
            }
        }
    }

    /// Forwards a new display size to the trail material. Zero sizes are ignored.
    pub fn update_resolution(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.material.resolution = [width, height];
        self.scene.update_material(&self.material);
    }

    /// Releases every segment and empties the trail. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        for segment in self.segments.drain(..) {
            self.scene.remove_line(segment.id);
        }
        self.arena.clear();
        self.last_position = None;
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &TrailSegment> + '_ {
        self.segments.iter()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn limits(&self) -> &TrailLimits {
        &self.limits
    }

    #[must_use]
    pub fn material(&self) -> &LineMaterial {
        &self.material
    }

    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last_position
    }

    /// How many times the trail has reset itself after a fault.
    #[must_use]
    pub fn recoveries(&self) -> u64 {
        self.recoveries
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    fn try_update(
        &mut self,
        position: Vec2,
        bounds: &WorldBounds,
        min_distance: f64,
    ) -> Result<TrailUpdate, TrailFault> {
        if !position.is_finite() {
            return Err(TrailFault::NonFinitePosition {
                x: position.x,
                y: position.y,
            });
        }

        let last = match self.last_position {
            Some(last) if !self.segments.is_empty() => last,
            _ => {
                self.start_segment(position)?;
                return Ok(TrailUpdate::Seeded);
            }
        };

        self.ensure_capacity(1)?;

        if last.distance_to(position) < min_distance {
            return Ok(TrailUpdate::Skipped);
        }

        if is_wrap_jump(last, position, bounds, self.limits.wrap_threshold_cap) {
            debug!(
                from_x = last.x,
                from_y = last.y,
                to_x = position.x,
                to_y = position.y,
                "wrap jump, starting new trail segment"
            );
            self.start_segment(position)?;
            return Ok(TrailUpdate::Wrapped);
        }

        self.extend_newest(position)?;
        Ok(TrailUpdate::Extended)
    }

    fn start_segment(&mut self, position: Vec2) -> Result<(), TrailFault> {
        if self.segments.len() >= self.limits.max_segments {
            self.evict_oldest_segment()?;
        }
        self.ensure_capacity(2)?;

        let start = self.push_point(position)?;
        self.push_point(position)?;

        let id = SegmentId(self.next_segment_id);
        self.next_segment_id += 1;

        let geometry = self.build_geometry(id, start, 2)?;
        self.scene.add_line(id, &geometry)?;
        self.segments.push_back(TrailSegment {
            id,
            start,
            len: 2,
            geometry,
        });

        debug!(segment = %id, segments = self.segments.len(), "trail segment started");
        self.record(position);
        Ok(())
    }

    /// Commits the live trailing vertex at `position` and pushes a new one.
    fn extend_newest(&mut self, position: Vec2) -> Result<(), TrailFault> {
        self.ensure_capacity(1)?;

        let tail = self.arena.tail();
        let (id, start, len) = match self.segments.back() {
            Some(segment) if segment.end() == tail && segment.len >= 2 => {
                (segment.id, segment.start, segment.len)
            }
            _ => return Err(TrailFault::SegmentLost),
        };

        if !self.arena.set(tail - 1, position) {
            return Err(TrailFault::SegmentLost);
        }
        self.push_point(position)?;

        let geometry = self.build_geometry(id, start, len + 1)?;
        self.scene.update_line(id, &geometry)?;
        if let Some(segment) = self.segments.back_mut() {
            segment.len = len + 1;
            segment.geometry = geometry;
        }

        self.record(position);
        Ok(())
    }

    /// Evicts oldest points until `needed` more fit in the budget.
    fn ensure_capacity(&mut self, needed: usize) -> Result<(), TrailFault> {
        let max_points = self.limits.max_points;
        if needed > max_points {
            return Err(TrailFault::ArenaFull {
                capacity: max_points,
            });
        }

        while self.arena.len() + needed > max_points {
            self.evict_oldest_point()?;
        }

        Ok(())
    }

    fn evict_oldest_point(&mut self) -> Result<(), TrailFault> {
        let Some(front) = self.segments.front() else {
            return Err(TrailFault::OrphanedPoints {
                count: self.arena.len(),
            });
        };

        if front.start != self.arena.head() || front.len < 2 {
            return Err(TrailFault::OrphanedPoints {
                count: self.arena.len(),
            });
        }

        if front.len - 1 < 2 {
            return self.evict_oldest_segment();
        }

        let (id, start, len) = (front.id, front.start + 1, front.len - 1);
        self.arena.pop_front();

        let geometry = self.build_geometry(id, start, len)?;
        self.scene.update_line(id, &geometry)?;
        if let Some(front) = self.segments.front_mut() {
            front.start = start;
            front.len = len;
            front.geometry = geometry;
        }

        Ok(())
    }

    fn evict_oldest_segment(&mut self) -> Result<(), TrailFault> {
        let Some(segment) = self.segments.pop_front() else {
            return Ok(());
        };

        for _ in 0..segment.len {
            if self.arena.pop_front().is_none() {
                return Err(TrailFault::OrphanedPoints { count: 0 });
            }
        }

        self.scene.remove_line(segment.id);
        debug!(segment = %segment.id, "oldest trail segment evicted");
        Ok(())
    }

    fn push_point(&mut self, position: Vec2) -> Result<u64, TrailFault> {
        self.arena.push(position).ok_or(TrailFault::ArenaFull {
            capacity: self.arena.capacity(),
        })
    }

    fn build_geometry(
        &self,
        id: SegmentId,
        start: u64,
        len: usize,
    ) -> Result<LineGeometry, TrailFault> {
        LineGeometry::from_points(self.arena.range(start, len))
            .map_err(|source| TrailFault::Geometry { id, source })
    }

    fn record(&mut self, position: Vec2) {
        self.last_position = Some(position);
        self.last_good_position = position;
    }

    fn recover(&mut self, fault: TrailFault) -> Result<TrailUpdate, TrajectoryError> {
        self.dispose();
        self.recoveries += 1;

        let anchor = self.last_good_position;
        match self.start_segment(anchor) {
            Ok(()) => {
                info!(
                    recoveries = self.recoveries,
                    x = anchor.x,
                    y = anchor.y,
                    "trail reset to a single segment"
                );
                Ok(TrailUpdate::Recovered(fault))
            }
            Err(source) => {
                error!(%fault, %source, "trail recovery failed");
                self.dispose();
                Err(TrajectoryError::RecoveryFailed { fault, source })
            }
        }
    }
}

/// True when the step between two samples is too large to be flight and must
/// come from crossing a world edge.
#[must_use]
pub fn is_wrap_jump(from: Vec2, to: Vec2, bounds: &WorldBounds, cap: f64) -> bool {
    let threshold_x = (bounds.width() / 2.0).min(cap);
    let threshold_y = (bounds.height() / 2.0).min(cap);

    (to.x - from.x).abs() > threshold_x || (to.y - from.y).abs() > threshold_y
}

use crate::core::trajectory::errors::SceneError;
use crate::core::trajectory::geometry::{LineGeometry, LineMaterial};
use crate::core::trajectory::segment::SegmentId;

/// Where trail segments are uploaded for rendering.
pub trait TrailScenePort {
    fn add_line(&mut self, id: SegmentId, geometry: &LineGeometry) -> Result<(), SceneError>;

    fn update_line(&mut self, id: SegmentId, geometry: &LineGeometry) -> Result<(), SceneError>;

    /// Releases the line. Unknown ids are ignored.
    fn remove_line(&mut self, id: SegmentId);

    fn update_material(&mut self, _material: &LineMaterial) {}
}

/// A scene that keeps nothing; presenters read geometry from the manager.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedScene;

impl TrailScenePort for DetachedScene {
    fn add_line(&mut self, _id: SegmentId, _geometry: &LineGeometry) -> Result<(), SceneError> {
        Ok(())
    }

    fn update_line(&mut self, _id: SegmentId, _geometry: &LineGeometry) -> Result<(), SceneError> {
        Ok(())
    }

    fn remove_line(&mut self, _id: SegmentId) {}
}

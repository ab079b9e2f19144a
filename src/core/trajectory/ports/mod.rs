//! Port definitions for the trail.
//!
//! The manager only talks to the renderer through these traits.

pub mod scene;

pub use scene::{DetachedScene, TrailScenePort};

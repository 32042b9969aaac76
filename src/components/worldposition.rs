//! World-space position component.
//!
//! The [`WorldPosition`] component stores an entity's position in the 3D
//! scene. For entities with a [`ChildOf`](bevy_ecs::hierarchy::ChildOf)
//! parent the position is local to the parent; see
//! [`GlobalTransform3D`](super::globaltransform3d::GlobalTransform3D).
//!
//! For overlay elements that live in window pixels, see
//! [`PositionLabel`](super::label::PositionLabel).

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Position (pivot) of an entity in scene units. Y is up; the ground is the
/// `y = 0` plane.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct WorldPosition {
    pub pos: Vec3,
}

impl Default for WorldPosition {
    fn default() -> Self {
        Self { pos: Vec3::ZERO }
    }
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }
}

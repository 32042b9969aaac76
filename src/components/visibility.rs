//! Visibility flag component.
//!
//! A hidden entity hides its whole subtree: the transform propagation system
//! folds ancestor visibility into
//! [`GlobalTransform3D::visible`](super::globaltransform3d::GlobalTransform3D).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn visible() -> Self {
        Self { visible: true }
    }

    pub fn hidden() -> Self {
        Self { visible: false }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::visible()
    }
}

//! On-screen label and leader-line components for fielding positions.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use raylib::prelude::Vector2;

/// Text pinned to the projection of a world-space anchor.
///
/// `screen` is refreshed every frame by
/// [`project_labels_system`](crate::systems::labels::project_labels_system);
/// `None` means the anchor is behind the camera.
#[derive(Component, Clone, Debug)]
pub struct PositionLabel {
    pub key: String,
    pub text: String,
    pub anchor: Vec3,
    pub screen: Option<Vector2>,
}

impl PositionLabel {
    pub fn new(key: impl Into<String>, text: impl Into<String>, anchor: Vec3) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            anchor,
            screen: None,
        }
    }
}

/// Marks a vertical line rising from a marker; hidden with the "show lines"
/// toggle.
#[derive(Component, Clone, Debug)]
pub struct LeaderLine {
    pub key: String,
}

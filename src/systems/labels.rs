//! Label projection.
//!
//! Every frame each [`PositionLabel`] anchor is projected through the camera
//! into window pixels. Anchors behind the camera get `None` and are skipped
//! by the renderer.

use bevy_ecs::prelude::*;

use crate::components::label::PositionLabel;
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::windowsize::WindowSize;

pub fn project_labels_system(
    camera: Res<OrbitCamera>,
    window: Res<WindowSize>,
    mut labels: Query<&mut PositionLabel>,
) {
    for mut label in labels.iter_mut() {
        label.screen = camera.world_to_screen(label.anchor, &window);
    }
}

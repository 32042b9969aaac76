//! Orbit camera controls.
//!
//! Left-drag orbits around the target, right-drag pans and the wheel zooms.
//! Gestures are queued on the [`OrbitCamera`] and its damped update runs
//! every frame, so the camera keeps gliding after the pointer stops.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::windowsize::WindowSize;

pub fn orbit_camera_system(
    input: Res<InputState>,
    window: Res<WindowSize>,
    mut camera: ResMut<OrbitCamera>,
) {
    camera.aspect = window.aspect();
    let pointer = &input.pointer;
    let height = window.h as f32;

    if !pointer.captured {
        if pointer.left.down {
            camera.rotate(pointer.delta.x, pointer.delta.y, height);
        } else if pointer.right.down {
            camera.pan(pointer.delta.x, pointer.delta.y, height);
        }
        if pointer.wheel != 0.0 {
            camera.zoom(pointer.wheel);
        }
    }

    camera.update();
}

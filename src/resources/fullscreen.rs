//! Fullscreen state resource.
//!
//! Present while the window is fullscreen. Toggled with F10.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct FullScreen {}

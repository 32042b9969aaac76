use bevy_ecs::prelude::Component;

/// Rotation around the vertical (Y) axis, in degrees.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn from_radians(radians: f32) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }
}

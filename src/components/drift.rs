//! Horizontal drift component for decorative clouds.

use bevy_ecs::prelude::Component;

/// Moves an entity along +X at a constant rate and wraps it back to
/// `wrap_to` once it passes `wrap_at`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Drift {
    /// Distance per reference (60 Hz) frame.
    pub speed: f32,
    pub wrap_at: f32,
    pub wrap_to: f32,
}

impl Drift {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            wrap_at: 40.0,
            wrap_to: -40.0,
        }
    }

    /// Next X coordinate after `frames` reference frames.
    pub fn step(&self, x: f32, frames: f32) -> f32 {
        let next = x + self.speed * frames;
        if next > self.wrap_at { self.wrap_to } else { next }
    }
}

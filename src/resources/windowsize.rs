//! Window size resource.
//!
//! Tracks the window dimensions in pixels. Updated every frame by the main
//! loop so resizes reach the camera aspect ratio and the overlay layout.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    pub fn aspect(&self) -> f32 {
        self.w.max(1) as f32 / self.h.max(1) as f32
    }

    /// Convert a window-pixel position into normalized device coordinates:
    /// `x` in `[-1, 1]` left to right, `y` in `[-1, 1]` bottom to top.
    pub fn to_ndc(&self, pos: Vector2) -> Vector2 {
        Vector2 {
            x: (pos.x / self.w.max(1) as f32) * 2.0 - 1.0,
            y: -(pos.y / self.h.max(1) as f32) * 2.0 + 1.0,
        }
    }

    /// Inverse of [`to_ndc`](Self::to_ndc).
    pub fn from_ndc(&self, ndc: Vector2) -> Vector2 {
        Vector2 {
            x: (ndc.x * 0.5 + 0.5) * self.w as f32,
            y: (-(ndc.y * 0.5) + 0.5) * self.h as f32,
        }
    }
}

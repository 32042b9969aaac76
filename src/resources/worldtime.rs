//! Frame timing resource.

use bevy_ecs::prelude::Resource;

/// Frame rate the per-frame constants of the scene animations are tuned for.
pub const REFERENCE_FPS: f32 = 60.0;
/// Longest frame, in seconds, the animations advance by in one step. A
/// stalled frame (window drag, minimise, slow first frame) counts as this.
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Last frame's delta expressed in reference frames, so a step tuned as
    /// "per frame at 60 Hz" advances at the same speed at any frame rate.
    /// Capped at [`MAX_FRAME_DELTA`].
    pub fn reference_frames(&self) -> f32 {
        self.delta.clamp(0.0, MAX_FRAME_DELTA) * REFERENCE_FPS
    }
}

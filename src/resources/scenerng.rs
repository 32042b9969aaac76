//! Seedable random source for scenery placement.

use bevy_ecs::prelude::Resource;

/// Wraps a [`fastrand::Rng`] so scene setup draws from one stream: the same
/// seed always yields the same grass, clouds and cloud speeds.
#[derive(Resource, Debug, Clone)]
pub struct SceneRng(pub fastrand::Rng);

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    pub fn from_entropy() -> Self {
        Self(fastrand::Rng::new())
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.0.f32()
    }

    /// Uniform in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.0.f32() * (max - min)
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

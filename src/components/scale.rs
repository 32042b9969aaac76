use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Debug, Copy)]
pub struct Scale {
    pub scale: Vec3,
}
impl Scale {
    pub fn new(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            scale: Vec3::new(sx, sy, sz),
        }
    }
    pub fn uniform(s: f32) -> Self {
        Self::new(s, s, s)
    }
    pub fn set_uniform(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

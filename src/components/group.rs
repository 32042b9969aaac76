use bevy_ecs::prelude::Component;

/// Tag naming the scene layer an entity belongs to ("ground", "markers"...).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

use bevy_ecs::prelude::Component;

/// Root of a fielder figure standing at the catalog position `key`.
///
/// The figure (body and head) hangs off this entity as children and is
/// shown only while the matching marker is hovered.
#[derive(Component, Clone, Debug)]
pub struct Fielder {
    pub key: String,
}

impl Fielder {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

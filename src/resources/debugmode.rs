//! Debug overlay toggle resource.
//!
//! While present, the renderer draws frame statistics, camera state and
//! marker bounds. Toggled with F11.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, debug overlays are drawn.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}

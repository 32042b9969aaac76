//! Label and leader-line visibility toggles.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct ViewOptions {
    pub show_labels: bool,
    pub show_lines: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_lines: true,
        }
    }
}

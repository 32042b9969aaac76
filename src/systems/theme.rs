//! Day/night recoloring.

use bevy_ecs::prelude::*;

use crate::components::material::Material;
use crate::components::themetint::ThemeTint;
use crate::resources::theme::Theme;

/// Swap every tinted material to the active theme's color. Opacity is kept.
pub fn apply_theme_system(theme: Res<Theme>, mut query: Query<(&ThemeTint, &mut Material)>) {
    if !theme.is_changed() {
        return;
    }
    for (tint, mut material) in query.iter_mut() {
        let color = tint.for_mode(theme.mode);
        material.color = raylib::prelude::Color {
            a: material.color.a,
            ..color
        };
    }
}

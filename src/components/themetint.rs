//! Theme-dependent color component.
//!
//! Entities carrying a [`ThemeTint`] have their
//! [`Material`](super::material::Material) color swapped by
//! [`apply_theme_system`](crate::systems::theme::apply_theme_system) whenever
//! the day/night [`Theme`](crate::resources::theme::Theme) changes.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

use crate::resources::theme::ThemeMode;

#[derive(Component, Clone, Copy, Debug)]
pub struct ThemeTint {
    pub day: Color,
    pub night: Color,
}

impl ThemeTint {
    pub fn new(day: Color, night: Color) -> Self {
        Self { day, night }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> Color {
        match mode {
            ThemeMode::Day => self.day,
            ThemeMode::Night => self.night,
        }
    }
}

//! Day/night theme resource.
//!
//! Holds the active [`ThemeMode`] and the palette that goes with it. Toggling
//! is an involution: two toggles restore the original mode.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

use crate::components::material::hex_rgb;

pub const DAY_SKY: Color = hex_rgb(0x87ceeb);
pub const NIGHT_SKY: Color = hex_rgb(0x0a0a2a);
pub const DAY_GROUND: Color = hex_rgb(0x2e8b57);
pub const NIGHT_GROUND: Color = hex_rgb(0x1a4d1a);
pub const DAY_PITCH: Color = hex_rgb(0xd2b48c);
pub const NIGHT_PITCH: Color = hex_rgb(0xb89a7c);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn from_night_flag(night: bool) -> Self {
        Self::new(if night { ThemeMode::Night } else { ThemeMode::Day })
    }

    pub fn is_night(&self) -> bool {
        self.mode == ThemeMode::Night
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Clear color; fog fades towards the same color.
    pub fn background(&self) -> Color {
        match self.mode {
            ThemeMode::Day => DAY_SKY,
            ThemeMode::Night => NIGHT_SKY,
        }
    }

    pub fn fog_color(&self) -> Color {
        self.background()
    }

    pub fn ground(&self) -> Color {
        match self.mode {
            ThemeMode::Day => DAY_GROUND,
            ThemeMode::Night => NIGHT_GROUND,
        }
    }

    pub fn pitch(&self) -> Color {
        match self.mode {
            ThemeMode::Day => DAY_PITCH,
            ThemeMode::Night => NIGHT_PITCH,
        }
    }

    /// Caption of the theme button: names the mode a click switches to.
    pub fn button_caption(&self) -> &'static str {
        match self.mode {
            ThemeMode::Day => "Night Mode",
            ThemeMode::Night => "Day Mode",
        }
    }

    /// Background of overlay panels, cards and the modal.
    pub fn panel_color(&self) -> Color {
        match self.mode {
            ThemeMode::Day => Color::new(255, 255, 255, 225),
            ThemeMode::Night => Color::new(24, 24, 48, 225),
        }
    }

    /// Fill of buttons and highlighted widgets.
    pub fn accent_color(&self) -> Color {
        match self.mode {
            ThemeMode::Day => Color::new(46, 139, 87, 255),
            ThemeMode::Night => Color::new(70, 90, 200, 255),
        }
    }

    /// Overlay text color readable on top of the panel color.
    pub fn text_color(&self) -> Color {
        match self.mode {
            ThemeMode::Day => Color::new(20, 20, 30, 255),
            ThemeMode::Night => Color::new(230, 230, 240, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        let mut theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Day);
        theme.toggle();
        assert!(theme.is_night());
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Day);
    }

    #[test]
    fn test_palettes() {
        let day = Theme::new(ThemeMode::Day);
        let night = Theme::new(ThemeMode::Night);
        assert_eq!(day.background(), hex_rgb(0x87ceeb));
        assert_eq!(night.background(), hex_rgb(0x0a0a2a));
        assert_eq!(day.ground(), hex_rgb(0x2e8b57));
        assert_eq!(night.ground(), hex_rgb(0x1a4d1a));
        assert_eq!(day.pitch(), hex_rgb(0xd2b48c));
        assert_eq!(night.pitch(), hex_rgb(0xb89a7c));
        assert_eq!(night.fog_color(), night.background());
    }

    #[test]
    fn test_button_caption_names_the_other_mode() {
        assert_eq!(Theme::new(ThemeMode::Day).button_caption(), "Night Mode");
        assert_eq!(Theme::new(ThemeMode::Night).button_caption(), "Day Mode");
    }

    #[test]
    fn test_from_night_flag() {
        assert!(Theme::from_night_flag(true).is_night());
        assert!(!Theme::from_night_flag(false).is_night());
    }
}

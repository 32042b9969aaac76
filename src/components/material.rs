//! Surface appearance component and color helpers.
//!
//! A [`Material`] carries the base color an entity is drawn with and whether
//! it reacts to scene lighting:
//! - [`Shading::Lit`] surfaces are Lambert-shaded by
//!   [`Lighting`](crate::resources::lighting::Lighting)
//! - [`Shading::Unlit`] surfaces (field markings, lines) keep their color
//!
//! Opacity lives in the color's alpha channel.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    Lit,
    Unlit,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Material {
    pub color: Color,
    pub shading: Shading,
    /// Fraction of the base color added on top of the lit result.
    pub emissive: f32,
}

impl Material {
    pub fn lit(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Lit,
            emissive: 0.0,
        }
    }

    pub fn unlit(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Unlit,
            emissive: 0.0,
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.color = with_opacity(self.color, opacity);
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.color.a < 255
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::unlit(Color::WHITE)
    }
}

/// Build an opaque color from a `0xRRGGBB` literal.
pub const fn hex_rgb(hex: u32) -> Color {
    Color {
        r: ((hex >> 16) & 0xff) as u8,
        g: ((hex >> 8) & 0xff) as u8,
        b: (hex & 0xff) as u8,
        a: 255,
    }
}

/// Replace the alpha channel with `opacity` in `[0, 1]`.
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
        ..color
    }
}

/// Multiply the RGB channels by `factor`, saturating at 255. Alpha is kept.
pub fn scale_rgb(color: Color, factor: f32) -> Color {
    let f = factor.max(0.0);
    Color {
        r: (color.r as f32 * f).round().min(255.0) as u8,
        g: (color.g as f32 * f).round().min(255.0) as u8,
        b: (color.b as f32 * f).round().min(255.0) as u8,
        a: color.a,
    }
}

/// Linear blend from `a` to `b` on the RGB channels; alpha comes from `a`.
pub fn lerp_rgb(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
        a: a.a,
    }
}

//! Scene lighting resource.
//!
//! A fixed light rig evaluated on the CPU: an ambient term, two directional
//! lights (key and rim) and a sky/ground hemisphere light. Surfaces are
//! Lambert-shaded against a single normal per triangle or per object.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use raylib::prelude::Color;

use crate::components::material::{Material, Shading, hex_rgb};

/// Light color as linear RGB in `[0, 1]` per channel.
fn rgb(color: Color) -> Vec3 {
    Vec3::new(color.r as f32, color.g as f32, color.b as f32) / 255.0
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    /// Where the light sits; it shines towards the origin.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Lambert term for a surface normal.
    fn contribution(&self, normal: Vec3) -> Vec3 {
        let to_light = self.position.normalize_or_zero();
        rgb(self.color) * self.intensity * normal.dot(to_light).max(0.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HemisphereLight {
    pub sky: Color,
    pub ground: Color,
    pub intensity: f32,
}

impl HemisphereLight {
    fn contribution(&self, normal: Vec3) -> Vec3 {
        let t = normal.y * 0.5 + 0.5;
        rgb(self.ground).lerp(rgb(self.sky), t) * self.intensity
    }
}

#[derive(Resource, Clone, Debug)]
pub struct Lighting {
    pub ambient: Color,
    pub ambient_intensity: f32,
    pub directional: Vec<DirectionalLight>,
    pub hemisphere: HemisphereLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: hex_rgb(0x404040),
            ambient_intensity: 0.6,
            directional: vec![
                DirectionalLight {
                    color: Color::WHITE,
                    intensity: 0.8,
                    position: Vec3::new(50.0, 50.0, 25.0),
                },
                DirectionalLight {
                    color: hex_rgb(0x4466ff),
                    intensity: 0.3,
                    position: Vec3::new(-25.0, 25.0, -25.0),
                },
            ],
            hemisphere: HemisphereLight {
                sky: hex_rgb(0x87ceeb),
                ground: hex_rgb(0x2e8b57),
                intensity: 0.3,
            },
        }
    }
}

impl Lighting {
    /// Total incoming light on a surface with the given normal.
    pub fn irradiance(&self, normal: Vec3) -> Vec3 {
        let n = normal.normalize_or_zero();
        let mut light = rgb(self.ambient) * self.ambient_intensity + self.hemisphere.contribution(n);
        for dl in &self.directional {
            light += dl.contribution(n);
        }
        light
    }

    /// Lambert-shade `color` for a surface facing `normal`. Alpha is kept.
    pub fn shade(&self, color: Color, normal: Vec3) -> Color {
        let lit = rgb(color) * self.irradiance(normal);
        to_color(lit, color.a)
    }

    /// Final color of a material: lit materials are shaded and get their
    /// emissive share added back, unlit ones pass through.
    pub fn shade_material(&self, material: &Material, normal: Vec3) -> Color {
        match material.shading {
            Shading::Unlit => material.color,
            Shading::Lit => {
                let base = rgb(material.color);
                let lit = base * self.irradiance(normal) + base * material.emissive;
                to_color(lit, material.color.a)
            }
        }
    }
}

fn to_color(v: Vec3, alpha: u8) -> Color {
    let c = (v.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    Color::new(c.x as u8, c.y as u8, c.z as u8, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(c: Color) -> u32 {
        c.r as u32 + c.g as u32 + c.b as u32
    }

    #[test]
    fn test_unlit_material_passes_through() {
        let lighting = Lighting::default();
        let m = Material::unlit(hex_rgb(0x123456)).with_opacity(0.5);
        let c = lighting.shade_material(&m, Vec3::NEG_Y);
        assert_eq!((c.r, c.g, c.b, c.a), (0x12, 0x34, 0x56, m.color.a));
    }

    #[test]
    fn test_upward_faces_are_brighter_than_downward() {
        let lighting = Lighting::default();
        let up = lighting.shade(Color::WHITE, Vec3::Y);
        let down = lighting.shade(Color::WHITE, Vec3::NEG_Y);
        assert!(luminance(up) > luminance(down));
    }

    #[test]
    fn test_face_away_from_lights_gets_ambient_and_ground_bounce_only() {
        let lighting = Lighting::default();
        let expected = rgb(lighting.ambient) * lighting.ambient_intensity
            + rgb(lighting.hemisphere.ground) * lighting.hemisphere.intensity;
        let got = lighting.irradiance(Vec3::NEG_Y);
        assert!((got - expected).length() < 1e-5);
    }

    #[test]
    fn test_emissive_brightens_lit_material() {
        let lighting = Lighting::default();
        let plain = Material::lit(hex_rgb(0x404040));
        let glowing = plain.with_emissive(0.2);
        let a = lighting.shade_material(&plain, Vec3::Z);
        let b = lighting.shade_material(&glowing, Vec3::Z);
        assert!(luminance(b) > luminance(a));
    }

    #[test]
    fn test_shade_keeps_alpha() {
        let lighting = Lighting::default();
        let c = lighting.shade(Color::new(255, 255, 255, 100), Vec3::Y);
        assert_eq!(c.a, 100);
    }
}

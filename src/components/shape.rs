//! Renderable geometry component.
//!
//! A [`Shape`] describes the primitive an entity draws, in the entity's local
//! space and centered on its [`WorldPosition`](super::worldposition::WorldPosition).
//! Spheres and cylinders map onto raylib primitives directly; flat and boxed
//! shapes are tessellated into [`ShapeTriangle`]s in world space so that yaw
//! rotation and per-face shading can be applied.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use std::f32::consts::TAU;

use super::globaltransform3d::{GlobalTransform3D, rotate_y};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
        rings: i32,
        slices: i32,
    },
    /// Vertical cylinder centered on its position.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        slices: i32,
    },
    /// Axis-aligned box (before yaw) centered on its position.
    Cuboid { size: Vec3 },
    /// Flat filled circle lying on the XZ plane.
    Disc { radius: f32, segments: u32 },
    /// Flat annulus lying on the XZ plane.
    Ring {
        inner: f32,
        outer: f32,
        segments: u32,
    },
    /// Flat rectangle on the XZ plane; `width` along X, `length` along Z.
    Plane { width: f32, length: f32 },
    /// Segment from the position to `position + end`.
    Line { end: Vec3 },
}

/// A world-space triangle with its face normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTriangle {
    pub verts: [Vec3; 3],
    pub normal: Vec3,
}

impl Shape {
    pub fn sphere(radius: f32, segments: i32) -> Self {
        Shape::Sphere {
            radius,
            rings: segments,
            slices: segments,
        }
    }

    pub fn cylinder(radius: f32, height: f32, slices: i32) -> Self {
        Shape::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            slices,
        }
    }

    pub fn cuboid(width: f32, height: f32, length: f32) -> Self {
        Shape::Cuboid {
            size: Vec3::new(width, height, length),
        }
    }

    /// Tessellate flat and boxed shapes into world-space triangles.
    ///
    /// Returns an empty list for shapes drawn with native primitives
    /// (spheres, cylinders, lines).
    pub fn triangles(&self, transform: &GlobalTransform3D) -> Vec<ShapeTriangle> {
        let up = Vec3::Y;
        match *self {
            Shape::Disc { radius, segments } => {
                let center = transform.transform_point(Vec3::ZERO);
                (0..segments)
                    .map(|i| {
                        let a = ring_point(radius, i, segments);
                        let b = ring_point(radius, i + 1, segments);
                        ShapeTriangle {
                            verts: [
                                center,
                                transform.transform_point(a),
                                transform.transform_point(b),
                            ],
                            normal: up,
                        }
                    })
                    .collect()
            }
            Shape::Ring {
                inner,
                outer,
                segments,
            } => {
                let mut tris = Vec::with_capacity(segments as usize * 2);
                for i in 0..segments {
                    let i0 = transform.transform_point(ring_point(inner, i, segments));
                    let i1 = transform.transform_point(ring_point(inner, i + 1, segments));
                    let o0 = transform.transform_point(ring_point(outer, i, segments));
                    let o1 = transform.transform_point(ring_point(outer, i + 1, segments));
                    tris.push(ShapeTriangle {
                        verts: [i0, o0, o1],
                        normal: up,
                    });
                    tris.push(ShapeTriangle {
                        verts: [i0, o1, i1],
                        normal: up,
                    });
                }
                tris
            }
            Shape::Plane { width, length } => {
                let hw = width * 0.5;
                let hl = length * 0.5;
                let c = [
                    Vec3::new(-hw, 0.0, -hl),
                    Vec3::new(hw, 0.0, -hl),
                    Vec3::new(hw, 0.0, hl),
                    Vec3::new(-hw, 0.0, hl),
                ]
                .map(|p| transform.transform_point(p));
                vec![
                    ShapeTriangle {
                        verts: [c[0], c[1], c[2]],
                        normal: up,
                    },
                    ShapeTriangle {
                        verts: [c[0], c[2], c[3]],
                        normal: up,
                    },
                ]
            }
            Shape::Cuboid { size } => cuboid_triangles(size * 0.5, transform),
            Shape::Sphere { .. } | Shape::Cylinder { .. } | Shape::Line { .. } => Vec::new(),
        }
    }
}

fn ring_point(radius: f32, i: u32, segments: u32) -> Vec3 {
    let angle = (i % segments.max(1)) as f32 / segments.max(1) as f32 * TAU;
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

fn cuboid_triangles(half: Vec3, transform: &GlobalTransform3D) -> Vec<ShapeTriangle> {
    // (normal, tangent u, tangent v) per face; corners are n +/- u +/- v.
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (-Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (-Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (-Vec3::Z, Vec3::Y, Vec3::X),
    ];
    let mut tris = Vec::with_capacity(12);
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| transform.transform_point((n + u * su + v * sv) * half);
        let c00 = corner(-1.0, -1.0);
        let c10 = corner(1.0, -1.0);
        let c11 = corner(1.0, 1.0);
        let c01 = corner(-1.0, 1.0);
        let normal = rotate_y(n, transform.yaw_degrees);
        tris.push(ShapeTriangle {
            verts: [c00, c10, c11],
            normal,
        });
        tris.push(ShapeTriangle {
            verts: [c00, c11, c01],
            normal,
        });
    }
    tris
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_ring_triangle_count_and_radii() {
        let ring = Shape::Ring {
            inner: 29.5,
            outer: 30.0,
            segments: 64,
        };
        let tris = ring.triangles(&GlobalTransform3D::default());
        assert_eq!(tris.len(), 128);
        for t in &tris {
            for v in t.verts {
                let r = (v.x * v.x + v.z * v.z).sqrt();
                assert!(r > 29.49 && r < 30.01, "vertex off the ring: {r}");
                assert!(approx(v.y, 0.0));
            }
        }
    }

    #[test]
    fn test_disc_is_a_fan_around_the_center() {
        let disc = Shape::Disc {
            radius: 30.0,
            segments: 64,
        };
        let gt = GlobalTransform3D {
            position: Vec3::new(0.0, -0.1, 0.0),
            ..Default::default()
        };
        let tris = disc.triangles(&gt);
        assert_eq!(tris.len(), 64);
        assert!(tris.iter().all(|t| t.verts[0] == Vec3::new(0.0, -0.1, 0.0)));
        assert!(tris.iter().all(|t| t.normal == Vec3::Y));
    }

    #[test]
    fn test_plane_rotated_by_yaw() {
        let blade = Shape::Plane {
            width: 0.1,
            length: 0.5,
        };
        let gt = GlobalTransform3D {
            yaw_degrees: 90.0,
            ..Default::default()
        };
        let tris = blade.triangles(&gt);
        assert_eq!(tris.len(), 2);
        // After a quarter turn the long side lies along X.
        let max_x = tris
            .iter()
            .flat_map(|t| t.verts)
            .map(|v| v.x.abs())
            .fold(0.0f32, f32::max);
        assert!(approx(max_x, 0.25));
    }

    #[test]
    fn test_cuboid_has_twelve_triangles_with_outward_normals() {
        let stand = Shape::cuboid(8.0, 3.0, 2.0);
        let gt = GlobalTransform3D {
            position: Vec3::new(0.0, 1.5, 35.0),
            ..Default::default()
        };
        let tris = stand.triangles(&gt);
        assert_eq!(tris.len(), 12);
        for t in &tris {
            let centroid = (t.verts[0] + t.verts[1] + t.verts[2]) / 3.0;
            assert!((centroid - gt.position).dot(t.normal) > 0.0);
        }
    }

    #[test]
    fn test_native_primitives_have_no_triangles() {
        let gt = GlobalTransform3D::default();
        assert!(Shape::sphere(0.3, 16).triangles(&gt).is_empty());
        assert!(Shape::cylinder(0.05, 0.7, 8).triangles(&gt).is_empty());
        assert!(Shape::Line { end: Vec3::Y }.triangles(&gt).is_empty());
    }
}

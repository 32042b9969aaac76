//! Computed world-space transform for scene entities.
//!
//! An entity's [`WorldPosition`](super::worldposition::WorldPosition),
//! [`Rotation`](super::rotation::Rotation), [`Scale`](super::scale::Scale)
//! and [`Visibility`](super::visibility::Visibility) are local values. When
//! the entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent they are
//! relative to it. The
//! [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system composes the ancestor chain and stores the result here, and the
//! renderer only reads this component.

use bevy_ecs::prelude::*;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GlobalTransform3D {
    /// World-space position.
    pub position: Vec3,
    /// World-space rotation around Y, in degrees.
    pub yaw_degrees: f32,
    /// World-space scale.
    pub scale: Vec3,
    /// False if the entity or any ancestor is hidden.
    pub visible: bool,
}

impl Default for GlobalTransform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            scale: Vec3::ONE,
            visible: true,
        }
    }
}

impl GlobalTransform3D {
    /// Map a point from this entity's local space into world space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + rotate_y(local * self.scale, self.yaw_degrees)
    }
}

/// Rotate `v` around the Y axis by `degrees` (right-handed, counter-clockwise
/// seen from above).
pub fn rotate_y(v: Vec3, degrees: f32) -> Vec3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_default_is_identity() {
        let gt = GlobalTransform3D::default();
        assert!(approx(gt.transform_point(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0)));
        assert!(gt.visible);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        // +Z rotates onto +X after a quarter turn
        let v = rotate_y(Vec3::Z, 90.0);
        assert!(approx(v, Vec3::X));
        let v = rotate_y(Vec3::X, 90.0);
        assert!(approx(v, -Vec3::Z));
    }

    #[test]
    fn test_transform_point_scales_then_rotates_then_translates() {
        let gt = GlobalTransform3D {
            position: Vec3::new(10.0, 0.0, 0.0),
            yaw_degrees: 90.0,
            scale: Vec3::splat(2.0),
            visible: true,
        };
        let p = gt.transform_point(Vec3::new(0.0, 1.0, 1.0));
        assert!(approx(p, Vec3::new(12.0, 2.0, 0.0)));
    }
}

//! Orbiting perspective camera resource.
//!
//! [`OrbitCamera`] keeps the camera on a sphere around a target point and
//! exposes the projection helpers the rest of the app needs: world-to-screen
//! projection for labels and screen-to-world rays for picking. All math is
//! done with `glam`; [`OrbitCamera::to_raylib`] converts the result into a
//! raylib camera only at draw time.
//!
//! Pointer gestures accumulate into pending deltas (`rotate`, `pan`, `zoom`)
//! which [`OrbitCamera::update`] applies with exponential damping once per
//! frame.

use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec3};
use raylib::prelude::{Camera3D, Vector2, Vector3};
use std::f32::consts::{PI, TAU};

use crate::resources::windowsize::WindowSize;

pub const DEFAULT_FOVY_DEGREES: f32 = 60.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_DAMPING: f32 = 0.05;
pub const MIN_DISTANCE: f32 = 10.0;
pub const MAX_DISTANCE: f32 = 50.0;
/// Zoom factor per wheel notch.
const ZOOM_STEP: f32 = 0.95;
/// Keeps the polar angle off the poles, where the view basis degenerates.
const POLAR_EPSILON: f32 = 1e-4;

/// Offset from a framed position to the camera.
pub const FRAME_OFFSET: Vec3 = Vec3::new(5.0, 8.0, 5.0);

/// Half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray3 {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with a sphere, or
    /// `None` if the ray misses it. A ray starting inside the sphere reports
    /// the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        if far >= 0.0 { Some(far) } else { None }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Fraction of the pending motion applied each update.
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    theta_delta: f32,
    phi_delta: f32,
    pan_offset: Vec3,
    zoom_scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 15.0, 25.0), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            fovy_degrees: DEFAULT_FOVY_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            aspect: 16.0 / 9.0,
            damping: DEFAULT_DAMPING,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            theta_delta: 0.0,
            phi_delta: 0.0,
            pan_offset: Vec3::ZERO,
            zoom_scale: 1.0,
        }
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// True while damped motion is still being applied.
    pub fn is_moving(&self) -> bool {
        self.theta_delta.abs() > 1e-5
            || self.phi_delta.abs() > 1e-5
            || self.pan_offset.length_squared() > 1e-10
            || (self.zoom_scale - 1.0).abs() > 1e-6
    }

    /// Queue an orbit from a pointer drag of `(dx, dy)` pixels in a viewport
    /// `viewport_height` pixels tall. A drag across the full height turns the
    /// camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.theta_delta -= TAU * dx / h * self.rotate_speed;
        self.phi_delta -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a pan from a pointer drag of `(dx, dy)` pixels so the point under
    /// the pointer at the target's depth follows the pointer.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let target_distance =
            self.distance() * (self.fovy_degrees.to_radians() * 0.5).tan();
        let (right, up) = self.basis();
        self.pan_offset -= right * (2.0 * dx * target_distance / h * self.pan_speed);
        self.pan_offset += up * (2.0 * dy * target_distance / h * self.pan_speed);
    }

    /// Queue a dolly; positive `wheel` moves towards the target.
    pub fn zoom(&mut self, wheel: f32) {
        self.zoom_scale *= ZOOM_STEP.powf(wheel * self.zoom_speed);
    }

    /// Apply one step of the pending motion and decay what remains.
    pub fn update(&mut self) {
        let offset = self.position - self.target;
        let mut radius = offset.length();
        if radius > f32::EPSILON {
            let mut theta = offset.x.atan2(offset.z);
            let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
            theta += self.theta_delta * self.damping;
            phi += self.phi_delta * self.damping;
            phi = phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
            radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);

            self.target += self.pan_offset * self.damping;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let (sin_theta, cos_theta) = theta.sin_cos();
            self.position = self.target
                + Vec3::new(
                    radius * sin_phi * sin_theta,
                    radius * cos_phi,
                    radius * sin_phi * cos_theta,
                );
        }

        let decay = 1.0 - self.damping;
        self.theta_delta *= decay;
        self.phi_delta *= decay;
        self.pan_offset *= decay;
        self.zoom_scale = 1.0;
    }

    /// Jump to a vantage point over the ground position `(x, z)` and look
    /// at it. Pending motion is discarded.
    pub fn frame_position(&mut self, x: f32, z: f32) {
        let target = Vec3::new(x, 0.0, z);
        self.target = target;
        self.position = target + FRAME_OFFSET;
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.pan_offset = Vec3::ZERO;
        self.zoom_scale = 1.0;
    }

    /// Camera right and up vectors in world space.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates. Returns
    /// `None` for points on or behind the camera plane.
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Project a world point into window pixels.
    pub fn world_to_screen(&self, point: Vec3, window: &WindowSize) -> Option<Vector2> {
        self.project(point).map(|ndc| {
            window.from_ndc(Vector2 {
                x: ndc.x,
                y: ndc.y,
            })
        })
    }

    /// Ray from the camera through a point given in normalized device
    /// coordinates.
    pub fn ray_from_ndc(&self, ndc: Vector2) -> Ray3 {
        let inverse = self.view_projection().inverse();
        let through = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray3 {
            origin: self.position,
            direction: (through - self.position).normalize_or_zero(),
        }
    }

    /// Ray from the camera through a window pixel.
    pub fn ray_from_screen(&self, pos: Vector2, window: &WindowSize) -> Ray3 {
        self.ray_from_ndc(window.to_ndc(pos))
    }

    pub fn to_raylib(&self) -> Camera3D {
        Camera3D::perspective(
            rl_vec3(self.position),
            rl_vec3(self.target),
            rl_vec3(Vec3::Y),
            self.fovy_degrees,
        )
    }
}

pub fn rl_vec3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

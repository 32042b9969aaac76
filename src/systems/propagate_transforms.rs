//! Transform propagation for parent-child entity hierarchies.
//!
//! Computes [`GlobalTransform3D`] for every positioned entity: roots (no
//! [`ChildOf`]) take their local values as-is, and descendants compose
//! position, yaw, scale and visibility with their parent's result.
//!
//! # Schedule position
//!
//! Runs **after** everything that mutates local transforms (drift, pulse)
//! and **before** label projection and rendering.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::globaltransform3d::{GlobalTransform3D, rotate_y};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::visibility::Visibility;
use crate::components::worldposition::WorldPosition;

type LocalTransform = (
    &'static WorldPosition,
    Option<&'static Rotation>,
    Option<&'static Scale>,
    Option<&'static Visibility>,
);

/// Propagate transforms from roots down through the hierarchy.
///
/// Entities that already have a `GlobalTransform3D` are updated in place.
/// Entities missing the component get it inserted via deferred [`Commands`]
/// (visible next frame).
pub fn propagate_transforms(
    roots: Query<(Entity, LocalTransform, Option<&Children>), Without<ChildOf>>,
    children_query: Query<(LocalTransform, Option<&Children>), With<ChildOf>>,
    mut globals: Query<&mut GlobalTransform3D>,
    mut commands: Commands,
) {
    for (root_entity, (pos, rot, scale, vis), children) in roots.iter() {
        let root_gt = GlobalTransform3D {
            position: pos.pos,
            yaw_degrees: rot.map(|r| r.degrees).unwrap_or(0.0),
            scale: scale.map(|s| s.scale).unwrap_or(Vec3::ONE),
            visible: vis.map(|v| v.visible).unwrap_or(true),
        };

        write_global(root_entity, root_gt, &mut globals, &mut commands);

        if let Some(children) = children {
            propagate_children(
                &root_gt,
                children,
                &children_query,
                &mut globals,
                &mut commands,
            );
        }
    }
}

fn write_global(
    entity: Entity,
    gt: GlobalTransform3D,
    globals: &mut Query<&mut GlobalTransform3D>,
    commands: &mut Commands,
) {
    if let Ok(mut current) = globals.get_mut(entity) {
        if *current != gt {
            *current = gt;
        }
    } else {
        commands.entity(entity).insert(gt);
    }
}

fn propagate_children(
    parent_gt: &GlobalTransform3D,
    children: &Children,
    children_query: &Query<(LocalTransform, Option<&Children>), With<ChildOf>>,
    globals: &mut Query<&mut GlobalTransform3D>,
    commands: &mut Commands,
) {
    for child_entity in children.iter() {
        let Ok(((pos, rot, scale, vis), maybe_grandchildren)) = children_query.get(child_entity)
        else {
            continue;
        };

        let local_yaw = rot.map(|r| r.degrees).unwrap_or(0.0);
        let local_scale = scale.map(|s| s.scale).unwrap_or(Vec3::ONE);
        let local_visible = vis.map(|v| v.visible).unwrap_or(true);

        let offset = rotate_y(pos.pos * parent_gt.scale, parent_gt.yaw_degrees);
        let child_gt = GlobalTransform3D {
            position: parent_gt.position + offset,
            yaw_degrees: parent_gt.yaw_degrees + local_yaw,
            scale: parent_gt.scale * local_scale,
            visible: parent_gt.visible && local_visible,
        };

        write_global(child_entity, child_gt, globals, commands);

        if let Some(grandchildren) = maybe_grandchildren {
            propagate_children(&child_gt, grandchildren, children_query, globals, commands);
        }
    }
}

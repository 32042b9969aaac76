//! Pointer picking of fielding-position markers.
//!
//! Casts a ray from the camera through the pointer and intersects it with
//! every marker sphere at its displayed scale. The nearest hit becomes the
//! hovered position: its marker grows, its fielder appears and the tooltip
//! follows the pointer. A click on a marker opens its info card.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::fielder::Fielder;
use crate::components::marker::{MARKER_RADIUS, PositionMarker};
use crate::components::visibility::Visibility;
use crate::components::worldposition::WorldPosition;
use crate::resources::fieldingcatalog::{FieldingCatalog, display_name};
use crate::resources::input::InputState;
use crate::resources::orbitcamera::{OrbitCamera, Ray3};
use crate::resources::overlay::OverlayState;
use crate::resources::windowsize::WindowSize;

/// Index and distance of the nearest sphere hit by `ray`, from
/// `(center, radius)` pairs.
pub fn nearest_hit(ray: &Ray3, spheres: impl IntoIterator<Item = (Vec3, f32)>) -> Option<(usize, f32)> {
    spheres
        .into_iter()
        .enumerate()
        .filter_map(|(i, (center, radius))| ray.intersect_sphere(center, radius).map(|t| (i, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

pub fn marker_picking_system(
    input: Res<InputState>,
    window: Res<WindowSize>,
    camera: Res<OrbitCamera>,
    catalog: Res<FieldingCatalog>,
    mut overlay: ResMut<OverlayState>,
    mut markers: Query<(&mut PositionMarker, &WorldPosition)>,
    mut fielders: Query<(&Fielder, &mut Visibility)>,
) {
    let pointer = &input.pointer;

    let hovered_key: Option<String> = if pointer.captured {
        None
    } else {
        let ray = camera.ray_from_screen(pointer.position, &window);
        let candidates: Vec<(String, Vec3, f32)> = markers
            .iter()
            .map(|(m, p)| (m.key.clone(), p.pos, MARKER_RADIUS * m.displayed_scale()))
            .collect();
        nearest_hit(&ray, candidates.iter().map(|(_, c, r)| (*c, *r)))
            .map(|(i, _)| candidates[i].0.clone())
    };

    for (mut marker, _) in markers.iter_mut() {
        let hovered = hovered_key.as_deref() == Some(marker.key.as_str());
        if marker.hovered != hovered {
            marker.hovered = hovered;
        }
    }
    for (fielder, mut visibility) in fielders.iter_mut() {
        let visible = hovered_key.as_deref() == Some(fielder.key.as_str());
        if visibility.visible != visible {
            visibility.visible = visible;
        }
    }

    match hovered_key.as_deref() {
        Some(key) => {
            overlay.show_tooltip(display_name(key), pointer.position);
            if pointer.clicked() {
                if let Some(position) = catalog.get(key) {
                    overlay.open_card(position.display_name(), position.desc.clone());
                }
            }
        }
        None => {
            if overlay.tooltip.is_some() {
                overlay.hide_tooltip();
            }
        }
    }
}

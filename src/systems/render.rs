//! Rendering.
//!
//! [`render_system`] draws one frame inside raylib's drawing scope:
//! 1. the 3D scene through the orbit camera, opaque shapes first and
//!    transparent ones back to front, with CPU lighting and linear fog
//! 2. position labels and the 2D overlay (panel, tooltip, card, modal)
//! 3. the debug overlay while [`DebugMode`] is present

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use glam::Vec3;
use raylib::prelude::*;
use std::cmp::Ordering;

use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::label::{LeaderLine, PositionLabel};
use crate::components::marker::{MARKER_RADIUS, PositionMarker};
use crate::components::material::{Material, lerp_rgb, with_opacity};
use crate::components::shape::Shape;
use crate::resources::debugmode::DebugMode;
use crate::resources::fieldingcatalog::FieldingCatalog;
use crate::resources::groupcounts::GroupCounts;
use crate::resources::input::InputState;
use crate::resources::lighting::Lighting;
use crate::resources::orbitcamera::{OrbitCamera, rl_vec3};
use crate::resources::overlay::{
    FONT_SIZE, OverlayHit, OverlayLayout, OverlayState, PANEL_TITLE, TITLE_FONT_SIZE,
    WELCOME_BUTTON, WELCOME_TITLE, text_width,
};
use crate::resources::theme::Theme;
use crate::resources::viewoptions::ViewOptions;
use crate::resources::windowsize::WindowSize;

/// Distance at which fog starts.
pub const FOG_NEAR: f32 = 20.0;
/// Distance at which fog fully replaces the surface color.
pub const FOG_FAR: f32 = 50.0;
const LABEL_FONT_SIZE: i32 = 14;

/// Linear fog amount in `[0, 1]` at `distance` from the eye.
pub fn fog_factor(distance: f32) -> f32 {
    ((distance - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0)
}

/// Draw order: opaque before transparent, then far before near.
pub fn draw_order(a: (bool, f32), b: (bool, f32)) -> Ordering {
    a.0.cmp(&b.0).then(b.1.total_cmp(&a.1))
}

/// Per-frame inputs shared by every shape draw.
struct ShadeContext<'a> {
    lighting: &'a Lighting,
    fog_color: Color,
    eye: Vec3,
}

impl ShadeContext<'_> {
    fn color(&self, material: &Material, normal: Vec3, at: Vec3) -> Color {
        let lit = self.lighting.shade_material(material, normal);
        lerp_rgb(lit, self.fog_color, fog_factor(self.eye.distance(at)))
    }
}

/// Scene state the renderer reads.
#[derive(SystemParam)]
pub struct SceneView<'w, 's> {
    pub camera: Res<'w, OrbitCamera>,
    pub theme: Res<'w, Theme>,
    pub lighting: Res<'w, Lighting>,
    pub view: Res<'w, ViewOptions>,
    pub overlay: Res<'w, OverlayState>,
    pub window: Res<'w, WindowSize>,
    pub catalog: Res<'w, FieldingCatalog>,
    pub shapes: Query<
        'w,
        's,
        (
            &'static Shape,
            &'static Material,
            &'static GlobalTransform3D,
            Has<LeaderLine>,
        ),
    >,
    pub labels: Query<'w, 's, &'static PositionLabel>,
    pub markers: Query<'w, 's, (&'static PositionMarker, &'static GlobalTransform3D)>,
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    scene: SceneView,
    input: Res<InputState>,
    debug: Option<Res<DebugMode>>,
    groups: Res<GroupCounts>,
    entities: Query<Entity>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(scene.theme.background());

    {
        let mut d3 = d.begin_mode3D(scene.camera.to_raylib());
        draw_scene(&mut d3, &scene);
        if debug.is_some() {
            for (marker, gt) in scene.markers.iter() {
                let color = if marker.hovered { Color::RED } else { Color::BLACK };
                d3.draw_sphere_wires(
                    rl_vec3(gt.position),
                    MARKER_RADIUS * gt.scale.x,
                    6,
                    8,
                    color,
                );
            }
        }
    }

    if scene.view.show_labels {
        draw_labels(&mut d, &scene);
    }
    draw_overlay(&mut d, &scene);

    if debug.is_some() {
        draw_debug_ui(&mut d, &scene, &input, &groups, entities.iter().count());
    }
}

fn draw_scene<D: RaylibDraw3D>(d: &mut D, scene: &SceneView) {
    let eye = scene.camera.position;
    let ctx = ShadeContext {
        lighting: &scene.lighting,
        fog_color: scene.theme.fog_color(),
        eye,
    };

    let mut items: Vec<_> = scene
        .shapes
        .iter()
        .filter(|(_, _, gt, is_line)| gt.visible && (!is_line || scene.view.show_lines))
        .map(|(shape, material, gt, _)| {
            let distance = eye.distance(gt.position);
            (shape, material, gt, distance)
        })
        .collect();
    items.sort_by(|a, b| {
        draw_order(
            (a.1.is_transparent(), a.3),
            (b.1.is_transparent(), b.3),
        )
    });

    for (shape, material, gt, _) in items {
        draw_shape(d, shape, material, gt, &ctx);
    }
}

fn draw_shape<D: RaylibDraw3D>(
    d: &mut D,
    shape: &Shape,
    material: &Material,
    gt: &GlobalTransform3D,
    ctx: &ShadeContext,
) {
    match *shape {
        Shape::Sphere {
            radius,
            rings,
            slices,
        } => {
            let center = gt.position;
            let normal = (ctx.eye - center).normalize_or(Vec3::Y);
            let color = ctx.color(material, normal, center);
            d.draw_sphere_ex(rl_vec3(center), radius * gt.scale.max_element(), rings, slices, color);
        }
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            slices,
        } => {
            let h = height * gt.scale.y;
            let base = gt.position - Vec3::Y * (h * 0.5);
            let side = ctx.eye - gt.position;
            let normal = Vec3::new(side.x, 0.0, side.z).normalize_or(Vec3::Y);
            let color = ctx.color(material, normal, gt.position);
            d.draw_cylinder(
                rl_vec3(base),
                radius_top * gt.scale.x,
                radius_bottom * gt.scale.x,
                h,
                slices,
                color,
            );
        }
        Shape::Line { end } => {
            let color = ctx.color(material, Vec3::Y, gt.position);
            d.draw_line_3D(rl_vec3(gt.position), rl_vec3(gt.transform_point(end)), color);
        }
        Shape::Cuboid { .. } | Shape::Disc { .. } | Shape::Ring { .. } | Shape::Plane { .. } => {
            for tri in shape.triangles(gt) {
                let [a, b, c] = tri.verts;
                let centroid = (a + b + c) / 3.0;
                let winding = (b - a).cross(c - a);
                // each winding is shaded with the normal on its own side
                let front = if winding.dot(tri.normal) >= 0.0 {
                    tri.normal
                } else {
                    -tri.normal
                };
                let front_color = ctx.color(material, front, centroid);
                let back_color = ctx.color(material, -front, centroid);
                d.draw_triangle3D(rl_vec3(a), rl_vec3(b), rl_vec3(c), front_color);
                d.draw_triangle3D(rl_vec3(a), rl_vec3(c), rl_vec3(b), back_color);
            }
        }
    }
}

fn draw_labels<D: RaylibDraw>(d: &mut D, scene: &SceneView) {
    for label in scene.labels.iter() {
        let Some(at) = label.screen else {
            continue;
        };
        let w = text_width(&label.text, LABEL_FONT_SIZE);
        let x = at.x - w * 0.5;
        let y = at.y - LABEL_FONT_SIZE as f32 - 12.0;
        d.draw_rectangle_rec(
            Rectangle::new(x - 4.0, y - 2.0, w + 8.0, LABEL_FONT_SIZE as f32 + 4.0),
            Color::new(0, 0, 0, 150),
        );
        d.draw_text(&label.text, x as i32, y as i32, LABEL_FONT_SIZE, Color::WHITE);
    }
}

fn draw_button<D: RaylibDraw>(d: &mut D, rect: Rectangle, caption: &str, fill: Color, hot: bool) {
    let fill = if hot { lerp_rgb(fill, Color::WHITE, 0.2) } else { fill };
    d.draw_rectangle_rec(rect, fill);
    let w = text_width(caption, FONT_SIZE);
    d.draw_text(
        caption,
        (rect.x + (rect.width - w) * 0.5) as i32,
        (rect.y + (rect.height - FONT_SIZE as f32) * 0.5) as i32,
        FONT_SIZE,
        Color::WHITE,
    );
}

fn draw_checkbox<D: RaylibDraw>(d: &mut D, row: Rectangle, caption: &str, checked: bool, text: Color, accent: Color) {
    let b = OverlayLayout::checkbox_box(&row);
    d.draw_rectangle_lines_ex(b, 2.0, text);
    if checked {
        d.draw_rectangle_rec(
            Rectangle::new(b.x + 4.0, b.y + 4.0, b.width - 8.0, b.height - 8.0),
            accent,
        );
    }
    d.draw_text(
        caption,
        (b.x + b.width + 8.0) as i32,
        (row.y + (row.height - FONT_SIZE as f32) * 0.5) as i32,
        FONT_SIZE,
        text,
    );
}

fn draw_overlay<D: RaylibDraw>(d: &mut D, scene: &SceneView) {
    let overlay: &OverlayState = &scene.overlay;
    let theme: &Theme = &scene.theme;
    let layout = OverlayLayout::compute(&scene.window, overlay, scene.catalog.len());
    let text = theme.text_color();
    let accent = theme.accent_color();
    let panel = theme.panel_color();
    let hot = |h: OverlayHit| overlay.hovered == Some(h);

    // control panel
    d.draw_rectangle_rec(layout.panel, panel);
    d.draw_text(
        PANEL_TITLE,
        (layout.panel.x + 10.0) as i32,
        (layout.panel.y + 10.0) as i32,
        TITLE_FONT_SIZE,
        text,
    );
    draw_checkbox(d, layout.labels_checkbox, "Show labels", scene.view.show_labels, text, accent);
    draw_checkbox(d, layout.lines_checkbox, "Show lines", scene.view.show_lines, text, accent);

    let names: Vec<String> = scene.catalog.iter().map(|p| p.display_name()).collect();
    let header = layout.dropdown_header;
    d.draw_rectangle_rec(header, with_opacity(panel, 1.0));
    d.draw_rectangle_lines_ex(header, if hot(OverlayHit::DropdownHeader) { 2.0 } else { 1.0 }, text);
    d.draw_text(
        overlay.dropdown_caption(&names),
        (header.x + 6.0) as i32,
        (header.y + (header.height - FONT_SIZE as f32) * 0.5) as i32,
        FONT_SIZE,
        text,
    );
    d.draw_text(
        if overlay.dropdown_open { "^" } else { "v" },
        (header.x + header.width - 16.0) as i32,
        (header.y + (header.height - FONT_SIZE as f32) * 0.5) as i32,
        FONT_SIZE,
        text,
    );
    draw_button(d, layout.theme_button, theme.button_caption(), accent, hot(OverlayHit::ThemeButton));

    // tooltip
    if let Some(tip) = &overlay.tooltip {
        let w = text_width(&tip.text, FONT_SIZE);
        d.draw_rectangle_rec(
            Rectangle::new(tip.at.x, tip.at.y, w + 12.0, FONT_SIZE as f32 + 8.0),
            Color::new(0, 0, 0, 200),
        );
        d.draw_text(&tip.text, (tip.at.x + 6.0) as i32, (tip.at.y + 4.0) as i32, FONT_SIZE, Color::WHITE);
    }

    // info card
    if let (Some(card), Some(close), Some(info)) = (layout.card, layout.card_close, &overlay.card) {
        d.draw_rectangle_rec(card, panel);
        d.draw_rectangle_lines_ex(card, 1.0, accent);
        d.draw_text(&info.title, (card.x + 10.0) as i32, (card.y + 10.0) as i32, TITLE_FONT_SIZE, text);
        draw_button(d, close, "x", accent, hot(OverlayHit::CardClose));
        let mut y = card.y + 10.0 + TITLE_FONT_SIZE as f32 * 1.5;
        for line in &layout.card_lines {
            d.draw_text(line, (card.x + 10.0) as i32, y as i32, FONT_SIZE, text);
            y += 20.0;
        }
    }

    // open dropdown list goes above the card
    for (i, entry) in layout.dropdown_entries.iter().enumerate() {
        let selected = overlay.selected == Some(i);
        let fill = if hot(OverlayHit::DropdownEntry(i)) || selected {
            accent
        } else {
            with_opacity(panel, 1.0)
        };
        d.draw_rectangle_rec(*entry, fill);
        let color = if fill == accent { Color::WHITE } else { text };
        if let Some(name) = names.get(i) {
            d.draw_text(name, (entry.x + 6.0) as i32, (entry.y + 3.0) as i32, FONT_SIZE, color);
        }
    }

    // welcome modal
    if let (Some(modal), Some(button)) = (layout.welcome, layout.welcome_button) {
        d.draw_rectangle(0, 0, scene.window.w, scene.window.h, Color::new(0, 0, 0, 140));
        d.draw_rectangle_rec(modal, with_opacity(panel, 1.0));
        d.draw_text(WELCOME_TITLE, (modal.x + 10.0) as i32, (modal.y + 10.0) as i32, TITLE_FONT_SIZE, text);
        let mut y = modal.y + 10.0 + 40.0;
        for line in &layout.welcome_lines {
            d.draw_text(line, (modal.x + 10.0) as i32, y as i32, FONT_SIZE, text);
            y += 20.0;
        }
        draw_button(d, button, WELCOME_BUTTON, accent, hot(OverlayHit::WelcomeStart));
    }
}

fn draw_debug_ui(
    d: &mut RaylibDrawHandle,
    scene: &SceneView,
    input: &InputState,
    groups: &GroupCounts,
    entity_count: usize,
) {
    let x = scene.window.w - 300;
    let mut y = 10;
    let mut line = |d: &mut RaylibDrawHandle, text: String| {
        d.draw_text(&text, x, y, 10, Color::BLACK);
        y += 14;
    };
    let fps = d.get_fps();
    line(d, format!("FPS: {}", fps));
    line(d, format!("Entities: {}", entity_count));
    for (name, count) in groups.sorted() {
        line(d, format!("  {}: {}", name, count));
    }
    let cam = &scene.camera;
    line(
        d,
        format!(
            "Camera: ({:.1}, {:.1}, {:.1}) -> ({:.1}, {:.1}, {:.1})",
            cam.position.x, cam.position.y, cam.position.z, cam.target.x, cam.target.y, cam.target.z
        ),
    );
    line(
        d,
        format!(
            "Distance: {:.2}{}",
            cam.distance(),
            if cam.is_moving() { " (moving)" } else { "" }
        ),
    );
    let p = &input.pointer;
    line(
        d,
        format!(
            "Pointer: ({:.0}, {:.0}) captured: {}",
            p.position.x, p.position.y, p.captured
        ),
    );
    let hovered = scene
        .markers
        .iter()
        .find(|(m, _)| m.hovered)
        .map(|(m, _)| m.key.as_str())
        .unwrap_or("-");
    line(d, format!("Hovered: {}", hovered));
}

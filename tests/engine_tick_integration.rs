//! Engine tick integration tests: setup, picking, animation, overlay and UI
//! commands driven through real `World`s and `Schedule`s, without a window.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec3;
use raylib::prelude::Vector2;

use cricketfield::components::drift::Drift;
use cricketfield::components::fielder::Fielder;
use cricketfield::components::globaltransform3d::GlobalTransform3D;
use cricketfield::components::group::Group;
use cricketfield::components::label::{LeaderLine, PositionLabel};
use cricketfield::components::marker::{HOVER_SCALE, PULSE_MAX, PULSE_MIN, PULSE_STEP, PositionMarker};
use cricketfield::components::material::{Material, Shading};
use cricketfield::components::scale::Scale;
use cricketfield::components::shape::Shape;
use cricketfield::components::themetint::ThemeTint;
use cricketfield::components::visibility::Visibility;
use cricketfield::components::worldposition::WorldPosition;
use cricketfield::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use cricketfield::events::ui::{UiAction, UiActionEvent, ui_action_observer};
use cricketfield::game;
use cricketfield::resources::fieldingcatalog::FieldingCatalog;
use cricketfield::resources::gameconfig::GameConfig;
use cricketfield::resources::gamestate::{GameState, GameStates, NextGameState};
use cricketfield::resources::groupcounts::GroupCounts;
use cricketfield::resources::input::{ButtonState, InputState};
use cricketfield::resources::orbitcamera::OrbitCamera;
use cricketfield::resources::overlay::{OverlayLayout, OverlayState};
use cricketfield::resources::scenerng::SceneRng;
use cricketfield::resources::statehooks::StateHooks;
use cricketfield::resources::theme::{DAY_GROUND, NIGHT_GROUND, NIGHT_PITCH, Theme};
use cricketfield::resources::viewoptions::ViewOptions;
use cricketfield::resources::windowsize::WindowSize;
use cricketfield::resources::worldtime::WorldTime;
use cricketfield::systems::animation::{drift_system, pulse_markers_system};
use cricketfield::systems::gamestate::check_pending_state;
use cricketfield::systems::group::update_group_counts_system;
use cricketfield::systems::input::dispatch_key_actions;
use cricketfield::systems::labels::project_labels_system;
use cricketfield::systems::overlay::overlay_interaction_system;
use cricketfield::systems::picking::marker_picking_system;
use cricketfield::systems::propagate_transforms::propagate_transforms;
use cricketfield::systems::theme::apply_theme_system;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn window() -> WindowSize {
    WindowSize { w: 1280, h: 720 }
}

/// World with every resource the scene systems read, a fixed seed and the
/// gamestate/UI observers registered.
fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(window());
    let mut camera = OrbitCamera::default();
    camera.aspect = window().aspect();
    world.insert_resource(camera);
    world.insert_resource(ViewOptions::default());
    world.insert_resource(Theme::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GroupCounts::new());
    world.insert_resource(SceneRng::seeded(7));
    world.insert_resource(FieldingCatalog::builtin());
    world.insert_resource(GameConfig::new());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    let mut hooks = StateHooks::new();
    let setup = world.register_system(game::setup);
    hooks.on_enter(GameStates::Setup, setup);
    let enter_explore = world.register_system(game::enter_explore);
    hooks.on_enter(GameStates::Exploring, enter_explore);
    world.insert_resource(hooks);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(ui_action_observer));
    world.flush();
    world
}

/// Enter Setup, build the scene, then enter Exploring.
fn build_scene(world: &mut World) {
    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();
    tick_pending_state(world);
    tick_propagate(world);
    tick_propagate(world);
}

fn tick_pending_state(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(world);
}

fn tick_propagate(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(propagate_transforms);
    schedule.run(world);
}

fn tick_picking(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(marker_picking_system);
    schedule.run(world);
}

fn tick_drift(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(drift_system);
    schedule.run(world);
}

fn tick_pulse(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(pulse_markers_system);
    schedule.run(world);
}

fn tick_labels(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(project_labels_system);
    schedule.run(world);
}

fn tick_theme(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(apply_theme_system);
    schedule.run(world);
}

fn tick_key_actions(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(dispatch_key_actions);
    schedule.run(world);
}

fn tick_group_counts(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_group_counts_system);
    schedule.run(world);
}

fn tick_overlay(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(overlay_interaction_system);
    schedule.run(world);
}

fn count_group(world: &mut World, name: &str) -> usize {
    let mut q = world.query::<&Group>();
    q.iter(world).filter(|g| g.name() == name).count()
}

fn pointer_at(world: &mut World, position: Vector2, left: ButtonState) {
    let mut input = world.resource_mut::<InputState>();
    input.pointer.position = position;
    input.pointer.left = left;
    input.pointer.captured = false;
    input.pointer.drag_distance = 0.0;
}

fn release() -> ButtonState {
    ButtonState {
        down: false,
        pressed: false,
        released: true,
    }
}

fn marker_screen_pos(world: &World, key: &str) -> Vector2 {
    let catalog = world.resource::<FieldingCatalog>();
    let p = catalog.get(key).unwrap();
    let camera = world.resource::<OrbitCamera>();
    camera
        .world_to_screen(Vec3::new(p.x, 0.5, p.z), &window())
        .expect("marker in front of the camera")
}

fn find_marker(world: &mut World, key: &str) -> PositionMarker {
    let mut q = world.query::<&PositionMarker>();
    q.iter(world).find(|m| m.key == key).cloned().unwrap()
}

fn fielder_visible(world: &mut World, key: &str) -> bool {
    let mut q = world.query::<(&Fielder, &Visibility)>();
    q.iter(world)
        .find(|(f, _)| f.key == key)
        .map(|(_, v)| v.visible)
        .unwrap()
}

// =============================================================================
// Scene setup
// =============================================================================

#[test]
fn setup_builds_one_marker_line_label_and_fielder_per_position() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    assert_eq!(world.resource::<GameState>().get(), GameStates::Exploring);
    assert!(world.resource::<OverlayState>().welcome_open);

    let n = FieldingCatalog::builtin().len();
    assert_eq!(n, 18);
    let mut markers = world.query::<&PositionMarker>();
    assert_eq!(markers.iter(&world).count(), n);
    let mut lines = world.query::<&LeaderLine>();
    assert_eq!(lines.iter(&world).count(), n);
    let mut labels = world.query::<&PositionLabel>();
    assert_eq!(labels.iter(&world).count(), n);
    let mut fielders = world.query::<&Fielder>();
    assert_eq!(fielders.iter(&world).count(), n);
    // fielder root + body + head
    assert_eq!(count_group(&mut world, "fielders"), n * 3);
}

#[test]
fn setup_builds_scenery_from_config() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    assert_eq!(count_group(&mut world, "grass"), 100);
    // five cloud roots with four puffs each
    assert_eq!(count_group(&mut world, "clouds"), 5 * 5);
    let mut drifting = world.query::<&Drift>();
    assert_eq!(drifting.iter(&world).count(), 5);
    // ring + eight stands
    assert_eq!(count_group(&mut world, "stadium"), 9);
    // 2 x (3 stumps + 1 bail)
    assert_eq!(count_group(&mut world, "stumps"), 8);
}

#[test]
fn grass_blades_are_unlit_and_ground_is_lit() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let mut q = world.query::<(&Group, &Material, Has<ThemeTint>)>();
    for (group, material, tinted) in q.iter(&world) {
        if group.name() == "grass" {
            assert_eq!(material.shading, Shading::Unlit);
        }
        if tinted {
            assert_eq!(material.shading, Shading::Lit);
        }
    }
}

#[test]
fn group_counts_track_scene_layers() {
    let mut world = make_world(0.0);
    build_scene(&mut world);
    tick_group_counts(&mut world);

    let counts = world.resource::<GroupCounts>();
    assert_eq!(counts.get("markers"), 18);
    assert_eq!(counts.get("lines"), 18);
    assert_eq!(counts.get("labels"), 18);
    assert_eq!(counts.get("grass"), 100);
    assert_eq!(counts.get("clouds"), 25);
    assert_eq!(counts.get("nonexistent"), 0);
}

#[test]
fn same_seed_builds_same_scenery() {
    let positions = |world: &mut World| {
        let mut q = world.query::<(&Group, &WorldPosition)>();
        let mut v: Vec<(f32, f32)> = q
            .iter(world)
            .filter(|(g, _)| g.name() == "grass")
            .map(|(_, p)| (p.pos.x, p.pos.z))
            .collect();
        v.sort_by(|a, b| a.0.total_cmp(&b.0));
        v
    };
    let mut a = make_world(0.0);
    build_scene(&mut a);
    let mut b = make_world(0.0);
    build_scene(&mut b);
    assert_eq!(positions(&mut a), positions(&mut b));
}

#[test]
fn markers_sit_at_catalog_coordinates() {
    let mut world = make_world(0.0);
    build_scene(&mut world);
    let catalog = FieldingCatalog::builtin();
    let mut q = world.query::<(&PositionMarker, &WorldPosition, &Material)>();
    for (marker, pos, material) in q.iter(&world) {
        let entry = catalog.get(&marker.key).unwrap();
        assert!(approx_eq(pos.pos.x, entry.x));
        assert!(approx_eq(pos.pos.y, 0.5));
        assert!(approx_eq(pos.pos.z, entry.z));
        assert!(approx_eq(material.emissive, 0.2));
    }
}

#[test]
fn fielders_start_hidden_and_children_inherit_it() {
    let mut world = make_world(0.0);
    build_scene(&mut world);
    let mut q = world.query_filtered::<&GlobalTransform3D, (With<ChildOf>, With<Shape>)>();
    let hidden_children = q.iter(&world).filter(|gt| !gt.visible).count();
    assert_eq!(hidden_children, 18 * 2);
}

// =============================================================================
// Picking
// =============================================================================

#[test]
fn hovering_a_marker_shows_tooltip_and_fielder() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let at = marker_screen_pos(&world, "cover");
    pointer_at(&mut world, at, ButtonState::default());
    tick_picking(&mut world);

    assert!(find_marker(&mut world, "cover").hovered);
    assert!(!find_marker(&mut world, "point").hovered);
    assert!(fielder_visible(&mut world, "cover"));
    assert!(!fielder_visible(&mut world, "point"));
    let tooltip = world.resource::<OverlayState>().tooltip.clone().unwrap();
    assert_eq!(tooltip.text, "cover");
    assert!(approx_eq(tooltip.at.x, at.x + 15.0));
    assert!(approx_eq(tooltip.at.y, at.y + 15.0));
}

#[test]
fn moving_off_markers_hides_tooltip_and_fielders() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let at = marker_screen_pos(&world, "mid-on");
    pointer_at(&mut world, at, ButtonState::default());
    tick_picking(&mut world);
    assert!(fielder_visible(&mut world, "mid-on"));

    // the sky above the field
    pointer_at(&mut world, Vector2 { x: 640.0, y: 5.0 }, ButtonState::default());
    tick_picking(&mut world);
    assert!(!find_marker(&mut world, "mid-on").hovered);
    assert!(!fielder_visible(&mut world, "mid-on"));
    assert!(world.resource::<OverlayState>().tooltip.is_none());
}

#[test]
fn moving_between_markers_moves_the_fielder() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let first = marker_screen_pos(&world, "long-on");
    pointer_at(&mut world, first, ButtonState::default());
    tick_picking(&mut world);
    let second = marker_screen_pos(&world, "gully");
    pointer_at(&mut world, second, ButtonState::default());
    tick_picking(&mut world);

    assert!(!fielder_visible(&mut world, "long-on"));
    assert!(!find_marker(&mut world, "long-on").hovered);
    assert!(fielder_visible(&mut world, "gully"));
}

#[test]
fn clicking_a_marker_opens_its_card() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let at = marker_screen_pos(&world, "square-leg");
    pointer_at(&mut world, at, release());
    tick_picking(&mut world);

    let card = world.resource::<OverlayState>().card.clone().unwrap();
    assert_eq!(card.title, "square leg");
    let desc = FieldingCatalog::builtin().get("square-leg").unwrap().desc.clone();
    assert_eq!(card.body, desc);
}

#[test]
fn clicking_empty_space_keeps_the_card() {
    let mut world = make_world(0.0);
    build_scene(&mut world);
    world.resource_mut::<OverlayState>().open_card("gully", "text");

    pointer_at(&mut world, Vector2 { x: 640.0, y: 5.0 }, release());
    tick_picking(&mut world);

    assert_eq!(world.resource::<OverlayState>().card.as_ref().unwrap().title, "gully");
}

#[test]
fn drag_release_over_marker_does_not_click() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let at = marker_screen_pos(&world, "fine-leg");
    pointer_at(&mut world, at, release());
    world.resource_mut::<InputState>().pointer.drag_distance = 50.0;
    tick_picking(&mut world);

    assert!(world.resource::<OverlayState>().card.is_none());
}

#[test]
fn captured_pointer_does_not_pick() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    let at = marker_screen_pos(&world, "cover");
    pointer_at(&mut world, at, release());
    world.resource_mut::<InputState>().pointer.captured = true;
    tick_picking(&mut world);

    assert!(!find_marker(&mut world, "cover").hovered);
    assert!(world.resource::<OverlayState>().card.is_none());
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn clouds_drift_and_wrap() {
    let mut world = make_world(1.0 / 60.0);
    let cloud = world
        .spawn((WorldPosition::new(39.99, 20.0, 0.0), Drift::new(0.02)))
        .id();
    let slow = world
        .spawn((WorldPosition::new(0.0, 20.0, 0.0), Drift::new(0.01)))
        .id();

    tick_drift(&mut world);

    assert!(approx_eq(world.get::<WorldPosition>(cloud).unwrap().pos.x, -40.0));
    assert!(approx_eq(world.get::<WorldPosition>(slow).unwrap().pos.x, 0.01));
}

#[test]
fn cloud_x_never_exceeds_wrap_point() {
    let mut world = make_world(1.0 / 60.0);
    let cloud = world
        .spawn((WorldPosition::new(0.0, 20.0, 0.0), Drift::new(0.03)))
        .id();
    for _ in 0..3000 {
        tick_drift(&mut world);
        assert!(world.get::<WorldPosition>(cloud).unwrap().pos.x <= 40.0);
    }
}

#[test]
fn pulse_stays_in_bounds_and_hover_holds_scale() {
    let mut world = make_world(1.0 / 60.0);
    let marker = world
        .spawn((PositionMarker::new("cover"), Scale::uniform(1.0)))
        .id();

    for _ in 0..200 {
        tick_pulse(&mut world);
        let s = world.get::<Scale>(marker).unwrap().scale.x;
        assert!(s >= PULSE_MIN - PULSE_STEP - EPSILON);
        assert!(s <= PULSE_MAX + PULSE_STEP + EPSILON);
    }

    world.get_mut::<PositionMarker>(marker).unwrap().hovered = true;
    tick_pulse(&mut world);
    assert!(approx_eq(world.get::<Scale>(marker).unwrap().scale.x, HOVER_SCALE));
}

#[test]
fn pulse_speed_follows_frame_time() {
    let mut world = make_world(2.0 / 60.0);
    let marker = world
        .spawn((PositionMarker::new("cover"), Scale::uniform(1.0)))
        .id();
    tick_pulse(&mut world);
    // two reference frames in one tick
    assert!(approx_eq(
        world.get::<PositionMarker>(marker).unwrap().pulse,
        1.0 + 2.0 * PULSE_STEP
    ));
}

#[test]
fn long_frame_keeps_pulse_in_bounds() {
    let mut world = make_world(2.0);
    let growing = world
        .spawn((PositionMarker::new("cover"), Scale::uniform(1.0)))
        .id();
    let mut shrinking_marker = PositionMarker::new("point");
    shrinking_marker.pulse = 0.81;
    shrinking_marker.pulse_direction = -1.0;
    let shrinking = world
        .spawn((shrinking_marker, Scale::uniform(0.81)))
        .id();

    for _ in 0..3 {
        tick_pulse(&mut world);
        for entity in [growing, shrinking] {
            let s = world.get::<Scale>(entity).unwrap().scale.x;
            assert!(s > 0.0);
            assert!(s >= PULSE_MIN - PULSE_STEP - EPSILON);
            assert!(s <= PULSE_MAX + PULSE_STEP + EPSILON);
        }
    }
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn label_at_camera_target_projects_to_window_center() {
    let mut world = make_world(0.0);
    let label = world
        .spawn(PositionLabel::new("x", "x", Vec3::ZERO))
        .id();
    let behind = world
        .spawn(PositionLabel::new("y", "y", Vec3::new(0.0, 30.0, 50.0)))
        .id();
    tick_labels(&mut world);

    let at = world.get::<PositionLabel>(label).unwrap().screen.unwrap();
    assert!(approx_eq(at.x, 640.0));
    assert!(approx_eq(at.y, 360.0));
    assert!(world.get::<PositionLabel>(behind).unwrap().screen.is_none());
}

// =============================================================================
// UI commands
// =============================================================================

#[test]
fn toggles_flip_view_options() {
    let mut world = make_world(0.0);
    world.trigger(UiActionEvent::new(UiAction::ToggleLabels));
    world.trigger(UiActionEvent::new(UiAction::ToggleLines));
    let view = *world.resource::<ViewOptions>();
    assert!(!view.show_labels);
    assert!(!view.show_lines);
    world.trigger(UiActionEvent::new(UiAction::ToggleLabels));
    assert!(world.resource::<ViewOptions>().show_labels);
}

#[test]
fn theme_toggle_recolors_ground_and_pitch() {
    let mut world = make_world(0.0);
    build_scene(&mut world);

    world.trigger(UiActionEvent::new(UiAction::ToggleTheme));
    assert!(world.resource::<Theme>().is_night());
    tick_theme(&mut world);

    let mut q = world.query::<(&Group, &ThemeTint, &Material)>();
    let tinted: Vec<_> = q.iter(&world).map(|(g, _, m)| (g.name(), m.color)).collect();
    assert_eq!(tinted.len(), 2);
    for (group, color) in tinted {
        match group {
            "ground" => assert_eq!(color, NIGHT_GROUND),
            "pitch" => assert_eq!(color, NIGHT_PITCH),
            other => panic!("unexpected tinted group {other}"),
        }
    }

    world.trigger(UiActionEvent::new(UiAction::ToggleTheme));
    tick_theme(&mut world);
    let mut q = world.query::<(&Group, &ThemeTint, &Material)>();
    let ground = q
        .iter(&world)
        .find(|(g, _, _)| g.name() == "ground")
        .map(|(_, _, m)| m.color)
        .unwrap();
    assert_eq!(ground, DAY_GROUND);
}

#[test]
fn frame_position_moves_camera_over_the_position() {
    let mut world = make_world(0.0);
    let index = FieldingCatalog::builtin().index_of("cow-corner").unwrap();
    world.trigger(UiActionEvent::new(UiAction::FramePosition(index)));

    let camera = world.resource::<OrbitCamera>();
    assert_eq!(camera.position, Vec3::new(-10.0, 8.0, 17.0));
    assert_eq!(camera.target, Vec3::new(-15.0, 0.0, 12.0));
    assert_eq!(world.resource::<OverlayState>().selected, Some(index));
}

#[test]
fn frame_next_and_previous_wrap_around() {
    let mut world = make_world(0.0);
    let len = FieldingCatalog::builtin().len();

    world.trigger(UiActionEvent::new(UiAction::FrameNext));
    assert_eq!(world.resource::<OverlayState>().selected, Some(0));
    world.trigger(UiActionEvent::new(UiAction::FramePrevious));
    assert_eq!(world.resource::<OverlayState>().selected, Some(len - 1));
    world.trigger(UiActionEvent::new(UiAction::FrameNext));
    assert_eq!(world.resource::<OverlayState>().selected, Some(0));
}

#[test]
fn back_closes_modal_then_dropdown_then_card() {
    let mut world = make_world(0.0);
    {
        let mut overlay = world.resource_mut::<OverlayState>();
        overlay.welcome_open = true;
        overlay.dropdown_open = true;
        overlay.open_card("gully", "text");
    }
    world.trigger(UiActionEvent::new(UiAction::Back));
    assert!(!world.resource::<OverlayState>().welcome_open);
    assert!(world.resource::<OverlayState>().dropdown_open);
    world.trigger(UiActionEvent::new(UiAction::Back));
    assert!(!world.resource::<OverlayState>().dropdown_open);
    assert!(world.resource::<OverlayState>().card.is_some());
    world.trigger(UiActionEvent::new(UiAction::Back));
    assert!(world.resource::<OverlayState>().card.is_none());
}

#[test]
fn keyboard_shortcuts_dispatch_ui_actions() {
    let mut world = make_world(0.0);
    {
        let mut input = world.resource_mut::<InputState>();
        input.toggle_labels.just_pressed = true;
        input.toggle_theme.just_pressed = true;
        input.cycle_position.just_pressed = true;
        input.modifier_shift.active = true;
        input.fullscreen_toggle.just_pressed = true;
    }
    tick_key_actions(&mut world);

    assert!(!world.resource::<ViewOptions>().show_labels);
    assert!(world.resource::<Theme>().is_night());
    let len = FieldingCatalog::builtin().len();
    assert_eq!(world.resource::<OverlayState>().selected, Some(len - 1));
    assert!(world.resource::<GameConfig>().fullscreen);
}

#[test]
fn welcome_modal_blocks_scene_shortcuts_but_not_esc() {
    let mut world = make_world(0.0);
    world.resource_mut::<OverlayState>().welcome_open = true;
    {
        let mut input = world.resource_mut::<InputState>();
        input.toggle_labels.just_pressed = true;
        input.toggle_lines.just_pressed = true;
        input.toggle_theme.just_pressed = true;
        input.cycle_position.just_pressed = true;
    }
    let start = world.resource::<OrbitCamera>().position;
    tick_key_actions(&mut world);

    let view = *world.resource::<ViewOptions>();
    assert!(view.show_labels);
    assert!(view.show_lines);
    assert!(!world.resource::<Theme>().is_night());
    assert_eq!(world.resource::<OverlayState>().selected, None);
    assert_eq!(world.resource::<OrbitCamera>().position, start);
    assert!(world.resource::<OverlayState>().welcome_open);

    {
        let mut input = world.resource_mut::<InputState>();
        input.toggle_labels.just_pressed = false;
        input.toggle_lines.just_pressed = false;
        input.toggle_theme.just_pressed = false;
        input.cycle_position.just_pressed = false;
        input.action_back.just_pressed = true;
    }
    tick_key_actions(&mut world);
    assert!(!world.resource::<OverlayState>().welcome_open);
}

// =============================================================================
// Overlay interaction
// =============================================================================

fn center(r: &raylib::prelude::Rectangle) -> Vector2 {
    Vector2 {
        x: r.x + r.width * 0.5,
        y: r.y + r.height * 0.5,
    }
}

fn press() -> ButtonState {
    ButtonState {
        down: true,
        pressed: true,
        released: false,
    }
}

#[test]
fn pressing_welcome_button_closes_modal() {
    let mut world = make_world(0.0);
    world.resource_mut::<OverlayState>().welcome_open = true;
    let layout = OverlayLayout::compute(&window(), world.resource::<OverlayState>(), 18);
    let button = layout.welcome_button.unwrap();

    pointer_at(&mut world, center(&button), press());
    tick_overlay(&mut world);

    assert!(!world.resource::<OverlayState>().welcome_open);
    assert!(world.resource::<InputState>().pointer.captured);
}

#[test]
fn welcome_modal_blocks_scene_pointer() {
    let mut world = make_world(0.0);
    world.resource_mut::<OverlayState>().welcome_open = true;
    pointer_at(&mut world, Vector2 { x: 5.0, y: 700.0 }, ButtonState::default());
    tick_overlay(&mut world);
    assert!(world.resource::<InputState>().pointer.captured);
}

#[test]
fn checkbox_press_toggles_labels_and_captures_pointer() {
    let mut world = make_world(0.0);
    let layout = OverlayLayout::compute(&window(), world.resource::<OverlayState>(), 18);

    pointer_at(&mut world, center(&layout.labels_checkbox), press());
    tick_overlay(&mut world);

    assert!(!world.resource::<ViewOptions>().show_labels);
    assert!(world.resource::<InputState>().pointer.captured);
}

#[test]
fn dropdown_entry_press_frames_position() {
    let mut world = make_world(0.0);
    world.resource_mut::<OverlayState>().dropdown_open = true;
    let layout = OverlayLayout::compute(&window(), world.resource::<OverlayState>(), 18);

    pointer_at(&mut world, center(&layout.dropdown_entries[0]), press());
    tick_overlay(&mut world);

    let overlay = world.resource::<OverlayState>();
    assert_eq!(overlay.selected, Some(0));
    assert!(!overlay.dropdown_open);
    // wicket keeper at (0, 12)
    assert_eq!(world.resource::<OrbitCamera>().target, Vec3::new(0.0, 0.0, 12.0));
}

#[test]
fn scene_drag_keeps_pointer_when_crossing_the_panel() {
    let mut world = make_world(0.0);
    pointer_at(&mut world, Vector2 { x: 800.0, y: 400.0 }, press());
    tick_overlay(&mut world);
    assert!(!world.resource::<InputState>().pointer.captured);

    let layout = OverlayLayout::compute(&window(), world.resource::<OverlayState>(), 18);
    let held = ButtonState {
        down: true,
        pressed: false,
        released: false,
    };
    pointer_at(&mut world, center(&layout.theme_button), held);
    tick_overlay(&mut world);
    assert!(!world.resource::<InputState>().pointer.captured);
    assert!(!world.resource::<Theme>().is_night());
}

//! Scene construction and state enter hooks.
//!
//! [`setup`] runs once when the app enters [`GameStates::Setup`]: it spawns
//! the ground, pitch, stadium, clouds and one marker, leader line, label and
//! fielder per catalog entry, then requests [`GameStates::Exploring`].

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;
use raylib::prelude::Color;
use std::f32::consts::{PI, TAU};

use crate::components::drift::Drift;
use crate::components::fielder::Fielder;
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::group::Group;
use crate::components::label::{LeaderLine, PositionLabel};
use crate::components::marker::{MARKER_HEIGHT, MARKER_RADIUS, PositionMarker};
use crate::components::material::{Material, hex_rgb};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::components::themetint::ThemeTint;
use crate::components::visibility::Visibility;
use crate::components::worldposition::WorldPosition;
use crate::resources::fieldingcatalog::{FieldingCatalog, FieldingPosition};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::overlay::OverlayState;
use crate::resources::scenerng::SceneRng;
use crate::resources::theme::{
    DAY_GROUND, DAY_PITCH, NIGHT_GROUND, NIGHT_PITCH, Theme,
};

pub const FIELD_RADIUS: f32 = 30.0;
pub const INNER_RING_RADIUS: f32 = 20.0;
pub const PITCH_HALF_LENGTH: f32 = 10.0;
pub const STAND_COUNT: usize = 8;
pub const STAND_DISTANCE: f32 = 35.0;
/// Height the leader lines rise to.
pub const LINE_TOP: f32 = 5.0;
const CIRCLE_SEGMENTS: u32 = 64;

pub const GRASS_COLOR: Color = hex_rgb(0x1e7a1e);
pub const STUMP_COLOR: Color = hex_rgb(0x8b4513);
pub const STADIUM_COLOR: Color = hex_rgb(0x888888);
pub const STAND_COLOR: Color = hex_rgb(0x555555);
pub const FIELDER_BODY_COLOR: Color = hex_rgb(0x0000ff);
pub const FIELDER_HEAD_COLOR: Color = hex_rgb(0xffdbac);

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    catalog: Res<FieldingCatalog>,
    config: Res<GameConfig>,
    theme: Res<Theme>,
    mut rng: ResMut<SceneRng>,
) {
    spawn_ground(&mut commands, &theme, config.grass_blades, &mut rng);
    spawn_pitch(&mut commands, &theme);
    spawn_stadium(&mut commands);
    spawn_clouds(&mut commands, config.clouds, &mut rng);
    for position in catalog.iter() {
        spawn_position(&mut commands, position);
    }
    info!(
        "Scene built: {} fielding positions, {} grass blades, {} clouds",
        catalog.len(),
        config.grass_blades,
        config.clouds
    );

    next_state.set(GameStates::Exploring);
}

/// Show the welcome modal when exploring starts.
pub fn enter_explore(mut overlay: ResMut<OverlayState>) {
    overlay.welcome_open = true;
    info!("Exploring");
}

fn spawn_ground(commands: &mut Commands, theme: &Theme, grass_blades: u32, rng: &mut SceneRng) {
    commands.spawn((
        Group("ground"),
        WorldPosition::new(0.0, 0.0, 0.0),
        Shape::Disc {
            radius: FIELD_RADIUS,
            segments: CIRCLE_SEGMENTS,
        },
        Material::lit(theme.ground()),
        ThemeTint::new(DAY_GROUND, NIGHT_GROUND),
        GlobalTransform3D::default(),
    ));
    commands.spawn((
        Group("ground"),
        WorldPosition::new(0.0, 0.02, 0.0),
        Shape::Ring {
            inner: FIELD_RADIUS - 0.5,
            outer: FIELD_RADIUS,
            segments: CIRCLE_SEGMENTS,
        },
        Material::unlit(Color::WHITE),
        GlobalTransform3D::default(),
    ));
    commands.spawn((
        Group("ground"),
        WorldPosition::new(0.0, 0.02, 0.0),
        Shape::Ring {
            inner: INNER_RING_RADIUS,
            outer: INNER_RING_RADIUS + 0.2,
            segments: CIRCLE_SEGMENTS,
        },
        Material::unlit(Color::WHITE).with_opacity(0.8),
        GlobalTransform3D::default(),
    ));

    for _ in 0..grass_blades {
        let x = rng.range(-FIELD_RADIUS, FIELD_RADIUS);
        let z = rng.range(-FIELD_RADIUS, FIELD_RADIUS);
        let yaw = rng.unit() * PI;
        commands.spawn((
            Group("grass"),
            WorldPosition::new(x, 0.01, z),
            Rotation::from_radians(yaw),
            Shape::Plane {
                width: 0.1,
                length: 0.5,
            },
            Material::unlit(GRASS_COLOR),
            GlobalTransform3D::default(),
        ));
    }
}

fn spawn_pitch(commands: &mut Commands, theme: &Theme) {
    commands.spawn((
        Group("pitch"),
        WorldPosition::new(0.0, 0.05, 0.0),
        Shape::cuboid(3.0, 0.1, 2.0 * PITCH_HALF_LENGTH),
        Material::lit(theme.pitch()),
        ThemeTint::new(DAY_PITCH, NIGHT_PITCH),
        GlobalTransform3D::default(),
    ));

    for end in [-1.0_f32, 1.0] {
        let z = end * PITCH_HALF_LENGTH;
        // popping crease
        commands.spawn((
            Group("pitch"),
            WorldPosition::new(0.0, 0.06, z),
            Shape::cuboid(3.1, 0.02, 0.1),
            Material::unlit(Color::WHITE),
            GlobalTransform3D::default(),
        ));
        // bowling crease box
        commands.spawn((
            Group("pitch"),
            WorldPosition::new(0.0, 0.06, end * 9.4),
            Shape::cuboid(1.0, 0.11, 1.2),
            Material::unlit(Color::WHITE),
            GlobalTransform3D::default(),
        ));
        for x in [-0.2, 0.0, 0.2] {
            commands.spawn((
                Group("stumps"),
                WorldPosition::new(x, 0.35, z),
                Shape::cylinder(0.05, 0.7, 8),
                Material::lit(STUMP_COLOR),
                GlobalTransform3D::default(),
            ));
        }
        commands.spawn((
            Group("stumps"),
            WorldPosition::new(0.0, 0.7, z),
            Shape::cuboid(0.3, 0.05, 0.05),
            Material::lit(Color::WHITE),
            GlobalTransform3D::default(),
        ));
    }
}

fn spawn_stadium(commands: &mut Commands) {
    commands.spawn((
        Group("stadium"),
        WorldPosition::new(0.0, -0.1, 0.0),
        Shape::Ring {
            inner: 31.0,
            outer: 40.0,
            segments: CIRCLE_SEGMENTS,
        },
        Material::lit(STADIUM_COLOR),
        GlobalTransform3D::default(),
    ));
    for i in 0..STAND_COUNT {
        let angle = i as f32 / STAND_COUNT as f32 * TAU;
        commands.spawn((
            Group("stadium"),
            WorldPosition::new(angle.sin() * STAND_DISTANCE, 1.5, angle.cos() * STAND_DISTANCE),
            Rotation::from_radians(-angle),
            Shape::cuboid(8.0, 3.0, 2.0),
            Material::lit(STAND_COLOR),
            GlobalTransform3D::default(),
        ));
    }
}

fn spawn_clouds(commands: &mut Commands, clouds: u32, rng: &mut SceneRng) {
    for _ in 0..clouds {
        let speed = 0.01 + rng.unit() * 0.02;
        let cloud = commands
            .spawn((
                Group("clouds"),
                WorldPosition::new(
                    rng.range(-40.0, 40.0),
                    rng.range(15.0, 25.0),
                    rng.range(-40.0, 40.0),
                ),
                Drift::new(speed),
                GlobalTransform3D::default(),
            ))
            .id();
        for _ in 0..4 {
            let radius = 1.0 + rng.unit() * 1.5;
            let offset = Vec3::new(
                rng.range(-1.5, 1.5),
                rng.range(-0.5, 0.5),
                rng.range(-1.5, 1.5),
            );
            commands.spawn((
                Group("clouds"),
                WorldPosition::from_vec(offset),
                Shape::sphere(radius, 12),
                Material::lit(Color::WHITE).with_opacity(0.8),
                GlobalTransform3D::default(),
                ChildOf(cloud),
            ));
        }
    }
}

fn spawn_position(commands: &mut Commands, position: &FieldingPosition) {
    let color = hex_rgb(position.color);
    let anchor = Vec3::new(position.x, MARKER_HEIGHT, position.z);

    commands.spawn((
        Group("markers"),
        WorldPosition::from_vec(anchor),
        Scale::uniform(1.0),
        PositionMarker::new(position.key.clone()),
        Shape::sphere(MARKER_RADIUS, 16),
        Material::lit(color).with_emissive(0.2),
        GlobalTransform3D::default(),
    ));
    commands.spawn((
        Group("lines"),
        WorldPosition::from_vec(anchor),
        LeaderLine {
            key: position.key.clone(),
        },
        Shape::Line {
            end: Vec3::new(0.0, LINE_TOP - MARKER_HEIGHT, 0.0),
        },
        Material::unlit(color).with_opacity(0.7),
        GlobalTransform3D::default(),
    ));
    commands.spawn((
        Group("labels"),
        PositionLabel::new(position.key.clone(), position.display_name(), anchor),
    ));

    let fielder = commands
        .spawn((
            Group("fielders"),
            WorldPosition::new(position.x, 0.0, position.z),
            Visibility::hidden(),
            Fielder::new(position.key.clone()),
            GlobalTransform3D::default(),
        ))
        .id();
    commands.spawn((
        Group("fielders"),
        WorldPosition::new(0.0, 0.4, 0.0),
        Shape::cylinder(0.2, 0.8, 12),
        Material::lit(FIELDER_BODY_COLOR),
        GlobalTransform3D::default(),
        ChildOf(fielder),
    ));
    commands.spawn((
        Group("fielders"),
        WorldPosition::new(0.0, 1.0, 0.0),
        Shape::sphere(0.2, 12),
        Material::lit(FIELDER_HEAD_COLOR),
        GlobalTransform3D::default(),
        ChildOf(fielder),
    ));
}

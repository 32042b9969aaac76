//! Cricket Field Explorer entry point.
//!
//! An interactive 3D view of a cricket ground with its fielding positions,
//! written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the scene graph and per-frame systems
//! - **glam** for camera, projection and picking math
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (shapes, materials, markers, labels, etc.)
//! - [`events`] – Event types (state changes, UI actions, debug/fullscreen toggles)
//! - [`game`] – Scene construction and state enter hooks
//! - [`resources`] – ECS resources (camera, catalog, config, overlay, etc.)
//! - [`systems`] – ECS systems (input, camera, picking, animation, rendering)
//!
//! # Main Loop
//!
//! 1. Parse the command line, load the config and the fielding catalog
//! 2. Open the raylib window and build the ECS world and resources
//! 3. Register observers and state hooks, enter the Setup state
//! 4. Run the frame schedule until the window closes:
//!    - poll input, apply overlay and keyboard commands
//!    - orbit the camera, pick markers, animate clouds and markers
//!    - propagate transforms, project labels, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::switchfullscreen::switch_fullscreen_observer;
use crate::events::ui::ui_action_observer;
use crate::resources::debugmode::DebugMode;
use crate::resources::fieldingcatalog::FieldingCatalog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::groupcounts::GroupCounts;
use crate::resources::input::InputState;
use crate::resources::lighting::Lighting;
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::overlay::OverlayState;
use crate::resources::scenerng::SceneRng;
use crate::resources::statehooks::StateHooks;
use crate::resources::theme::Theme;
use crate::resources::viewoptions::ViewOptions;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{drift_system, pulse_markers_system};
use crate::systems::camera::orbit_camera_system;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::gamestate::{check_pending_state, state_is_exploring};
use crate::systems::group::update_group_counts_system;
use crate::systems::input::{dispatch_key_actions, update_input_state};
use crate::systems::labels::project_labels_system;
use crate::systems::overlay::overlay_interaction_system;
use crate::systems::picking::marker_picking_system;
use crate::systems::propagate_transforms::propagate_transforms;
use crate::systems::render::render_system;
use crate::systems::theme::apply_theme_system;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Cricket Field Explorer
#[derive(Parser)]
#[command(
    version,
    about = "Interactive 3D explorer of cricket fielding positions."
)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Load fielding positions from a JSON file instead of the built-in layout.
    #[arg(long, value_name = "PATH")]
    positions: Option<PathBuf>,

    /// Seed for the scenery layout (grass and clouds).
    #[arg(long)]
    seed: Option<u64>,

    /// Start in night mode.
    #[arg(long)]
    night: bool,

    /// Write the active fielding layout as JSON and exit.
    /// Optionally provide a path (default: positions.json).
    #[arg(long, value_name = "PATH")]
    export_positions: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let catalog = match &cli.positions {
        Some(path) => match FieldingCatalog::load_from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        None => FieldingCatalog::builtin(),
    };

    // Early-exit: write the layout and quit (no window needed)
    if let Some(maybe_path) = cli.export_positions {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("positions.json"));
        let written = catalog
            .to_json()
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        if let Err(e) = written {
            error!("Error writing {}: {e}", path.display());
            std::process::exit(1);
        }
        println!("Fielding positions written to {}", path.display());
        return;
    }

    // --------------- Config ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if cli.night {
        config.night_mode = true;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .msaa_4x()
        .title("Cricket Field Explorer")
        .build();
    rl.set_target_fps(config.target_fps);
    // Esc closes overlays, not the window
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    let window_size = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    let mut camera = OrbitCamera::default();
    camera.aspect = window_size.aspect();
    world.insert_resource(window_size);
    world.insert_resource(camera);
    world.insert_resource(ViewOptions {
        show_labels: config.show_labels,
        show_lines: config.show_lines,
    });
    world.insert_resource(Theme::from_night_flag(config.night_mode));
    world.insert_resource(Lighting::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GroupCounts::new());
    world.insert_resource(match cli.seed {
        Some(seed) => {
            info!("Scenery seed: {}", seed);
            SceneRng::seeded(seed)
        }
        None => SceneRng::from_entropy(),
    });
    world.insert_resource(catalog);
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // State enter hooks
    let mut hooks = StateHooks::new();
    let setup_system_id = world.register_system(game::setup);
    hooks.on_enter(GameStates::Setup, setup_system_id);
    let enter_explore_system_id = world.register_system(game::enter_explore);
    hooks.on_enter(GameStates::Exploring, enter_explore_system_id);
    world.insert_resource(hooks);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(switch_fullscreen_observer));
    world.spawn(Observer::new(ui_action_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();

    // Set next GameState to Setup
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {}); // Call inmediatly to enter Setup state

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            (
                dispatch_key_actions,
                overlay_interaction_system,
                orbit_camera_system,
                marker_picking_system,
            )
                .chain()
                .run_if(state_is_exploring),
            drift_system,
            pulse_markers_system,
            propagate_transforms,
            apply_theme_system,
            project_labels_system,
            update_group_counts_system.run_if(resource_exists::<DebugMode>),
            apply_gameconfig_changes,
            check_pending_state,
            render_system,
        )
            .chain(),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            if window_size.w != new_w || window_size.h != new_h {
                window_size.w = new_w;
                window_size.h = new_h;
            }
        }
    }
    info!("Bye");
}

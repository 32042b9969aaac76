//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, the camera,
//! the fielding catalog, configuration and overlay state. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `fieldingcatalog` – the named fielding positions and their loaders
//! - `fullscreen` – presence means the window is fullscreen
//! - `gameconfig` – INI-backed window and scene settings
//! - `gamestate` – authoritative and pending high-level state
//! - `groupcounts` – per-layer entity counts for the debug overlay
//! - `input` – per-frame keyboard and pointer state
//! - `lighting` – fixed light rig and Lambert shading
//! - `orbitcamera` – orbiting perspective camera, projection and rays
//! - `overlay` – 2D overlay state, layout and hit-testing
//! - `scenerng` – seedable random stream for scenery
//! - `statehooks` – one-shot systems run when a state is entered
//! - `theme` – day/night palette
//! - `viewoptions` – label and leader-line toggles
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – frame time and delta
pub mod debugmode;
pub mod fieldingcatalog;
pub mod fullscreen;
pub mod gameconfig;
pub mod gamestate;
pub mod groupcounts;
pub mod input;
pub mod lighting;
pub mod orbitcamera;
pub mod overlay;
pub mod scenerng;
pub mod statehooks;
pub mod theme;
pub mod viewoptions;
pub mod windowsize;
pub mod worldtime;

//! Per-frame systems.
//!
//! Submodules overview, in schedule order
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`] and dispatch shortcuts
//! - [`overlay`] – overlay hit-testing, pointer capture and widget presses
//! - [`camera`] – orbit, pan and zoom the camera
//! - [`picking`] – hover and click markers under the pointer
//! - [`animation`] – drift clouds and pulse markers
//! - [`propagate_transforms`] – compose parent-child transforms
//! - [`group`] – count entities per layer while debugging
//! - [`theme`] – recolor tinted materials on theme change
//! - [`labels`] – project label anchors to the window
//! - [`gameconfig`] – apply window settings on config change
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`render`] – draw the scene, overlay and debug UI with Raylib
//! - [`time`] – update frame time and delta (called from the main loop)

pub mod animation;
pub mod camera;
pub mod gameconfig;
pub mod gamestate;
pub mod group;
pub mod input;
pub mod labels;
pub mod overlay;
pub mod picking;
pub mod propagate_transforms;
pub mod render;
pub mod theme;
pub mod time;

//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies the window settings
//! (target FPS, vsync, fullscreen) to the running window.

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::ffi;

/// System that applies game configuration changes.
///
/// Runs every frame but only acts when [`GameConfig`] was added or modified:
/// - fires [`SwitchFullScreenEvent`] if the window's fullscreen state differs
///   from the config
/// - sets or clears the vsync window hint
/// - applies the target FPS
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if !(config.is_changed() || config.is_added()) {
        return;
    }

    let is_fullscreen = fullscreen.is_some();
    if config.fullscreen != is_fullscreen {
        debug!(
            "Fullscreen mismatch: config={}, window={} - triggering toggle",
            config.fullscreen, is_fullscreen
        );
        commands.trigger(SwitchFullScreenEvent {});
    }

    // SAFETY: plain window-state flags on the open window.
    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    rl.set_target_fps(config.target_fps);

    info!(
        "GameConfig applied: {} fps, vsync {}, fullscreen {}",
        config.target_fps, config.vsync, config.fullscreen
    );
}

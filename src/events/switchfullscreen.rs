//! Fullscreen toggle event and observer.
//!
//! Pressing **F10** triggers [`SwitchFullScreenEvent`], which is handled by
//! [`switch_fullscreen_observer`]. The observer toggles the window between
//! fullscreen and windowed mode, using the [`FullScreen`] marker resource to
//! track the current state.

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::ffi;

/// Event triggered to toggle fullscreen mode.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

/// Observer that toggles fullscreen mode when [`SwitchFullScreenEvent`] fires.
///
/// - If [`FullScreen`] exists: removes it, leaves fullscreen and restores the
///   configured window size.
/// - Otherwise: inserts it and enters fullscreen at the current monitor's
///   resolution.
pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    config: Res<GameConfig>,
) {
    info!("SwitchFullScreenEvent triggered");
    if fullscreen.is_some() {
        commands.remove_resource::<FullScreen>();

        if rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
            let (w, h) = config.window_size();
            rl.set_window_size(w as i32, h as i32);
            rl.restore_window();

            if rl.is_window_fullscreen() {
                error!("Failed to disable full screen");
            } else {
                info!("Full screen disabled");
            }
        }
    } else {
        commands.insert_resource(FullScreen {});

        if !rl.is_window_fullscreen() {
            // SAFETY: the window is open while observers run.
            let (monitor_width, monitor_height) = unsafe {
                let monitor = ffi::GetCurrentMonitor();
                (ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor))
            };
            info!("Monitor dimensions: {}x{}", monitor_width, monitor_height);
            rl.set_window_size(monitor_width, monitor_height);
            rl.toggle_fullscreen();

            if rl.is_window_fullscreen() {
                info!("Full screen enabled");
            } else {
                error!("Failed to enable full screen");
            }
        }
    }
}

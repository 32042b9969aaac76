//! Input systems.
//!
//! - [`update_input_state`] reads keyboard and mouse state from Raylib each
//!   frame and writes it into [`InputState`].
//! - [`dispatch_key_actions`] turns the keys pressed this frame into events:
//!   [`UiActionEvent`] for the explorer shortcuts, [`SwitchDebugEvent`] for
//!   F11, and a [`GameConfig`] fullscreen flip for F10. While the welcome
//!   modal is open only Esc, F10 and F11 act.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::ui::{UiAction, UiActionEvent};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{BoolState, ButtonState, InputState};
use crate::resources::overlay::OverlayState;

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSendMut<raylib::RaylibHandle>) {
    let poll = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.update(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    };

    poll(&mut input.toggle_labels);
    poll(&mut input.toggle_lines);
    poll(&mut input.toggle_theme);
    poll(&mut input.cycle_position);
    poll(&mut input.modifier_shift);
    poll(&mut input.action_back);
    poll(&mut input.mode_debug);
    poll(&mut input.fullscreen_toggle);
    // either shift key counts
    if rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT) {
        input.modifier_shift.active = true;
    }

    let button = |b: MouseButton| ButtonState {
        down: rl.is_mouse_button_down(b),
        pressed: rl.is_mouse_button_pressed(b),
        released: rl.is_mouse_button_released(b),
    };
    let left = button(MouseButton::MOUSE_BUTTON_LEFT);
    let right = button(MouseButton::MOUSE_BUTTON_RIGHT);
    input.pointer.advance(
        rl.get_mouse_position(),
        rl.get_mouse_delta(),
        rl.get_mouse_wheel_move(),
        left,
        right,
    );
}

/// Emit events for the keyboard shortcuts pressed this frame.
pub fn dispatch_key_actions(
    input: Res<InputState>,
    overlay: Res<OverlayState>,
    mut config: ResMut<GameConfig>,
    mut commands: Commands,
) {
    let mut ui = |action: UiAction| commands.trigger(UiActionEvent::new(action));

    if !overlay.welcome_open {
        if input.toggle_labels.just_pressed {
            ui(UiAction::ToggleLabels);
        }
        if input.toggle_lines.just_pressed {
            ui(UiAction::ToggleLines);
        }
        if input.toggle_theme.just_pressed {
            ui(UiAction::ToggleTheme);
        }
        if input.cycle_position.just_pressed {
            if input.modifier_shift.active {
                ui(UiAction::FramePrevious);
            } else {
                ui(UiAction::FrameNext);
            }
        }
    }
    if input.action_back.just_pressed {
        ui(UiAction::Back);
    }
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.fullscreen_toggle.just_pressed {
        // apply_gameconfig_changes brings the window in line with the flag
        config.fullscreen = !config.fullscreen;
    }
}

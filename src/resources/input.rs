//! Per-frame input resource.
//!
//! Captures the subset of keyboard and pointer state the explorer cares
//! about and exposes it to systems via the [`InputState`] resource.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Pointer travel in pixels below which a press/release still counts as a
/// click rather than an orbit drag.
pub const CLICK_SLOP: f32 = 4.0;

/// State of one mouse button this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub down: bool,
    pub pressed: bool,
    pub released: bool,
}

/// Pointer (mouse) state in window pixels.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vector2,
    /// Movement since the previous frame.
    pub delta: Vector2,
    /// Wheel movement this frame; positive scrolls away from the user.
    pub wheel: f32,
    pub left: ButtonState,
    pub right: ButtonState,
    /// Distance travelled since the left button went down.
    pub drag_distance: f32,
    /// Set when an overlay widget is under the pointer; the 3D scene must
    /// ignore the pointer for the rest of the frame.
    pub captured: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            delta: Vector2 { x: 0.0, y: 0.0 },
            wheel: 0.0,
            left: ButtonState::default(),
            right: ButtonState::default(),
            drag_distance: 0.0,
            captured: false,
        }
    }
}

impl PointerState {
    /// Record this frame's pointer sample. The overlay capture flag is
    /// cleared; the overlay system sets it again if needed.
    pub fn advance(
        &mut self,
        position: Vector2,
        delta: Vector2,
        wheel: f32,
        left: ButtonState,
        right: ButtonState,
    ) {
        self.position = position;
        self.delta = delta;
        self.wheel = wheel;
        self.left = left;
        self.right = right;
        self.captured = false;
        if left.pressed || right.pressed {
            self.drag_distance = 0.0;
        } else if left.down || right.down || left.released || right.released {
            self.drag_distance += delta.x.hypot(delta.y);
        }
    }

    /// A left click this frame: the button went up without the pointer being
    /// dragged while it was held.
    pub fn clicked(&self) -> bool {
        self.left.released && self.drag_distance <= CLICK_SLOP
    }
}

/// Resource capturing the per-frame input state relevant to the explorer.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub toggle_labels: BoolState,
    pub toggle_lines: BoolState,
    pub toggle_theme: BoolState,
    pub cycle_position: BoolState,
    pub modifier_shift: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            toggle_labels: BoolState::bound_to(KeyboardKey::KEY_L),
            toggle_lines: BoolState::bound_to(KeyboardKey::KEY_K),
            toggle_theme: BoolState::bound_to(KeyboardKey::KEY_N),
            cycle_position: BoolState::bound_to(KeyboardKey::KEY_TAB),
            modifier_shift: BoolState::bound_to(KeyboardKey::KEY_LEFT_SHIFT),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            fullscreen_toggle: BoolState::bound_to(KeyboardKey::KEY_F10),
            pointer: PointerState::default(),
        }
    }
}

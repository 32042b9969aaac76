//! Overlay pointer handling.
//!
//! Runs right after input polling. Decides whether the overlay or the 3D
//! scene owns the pointer this frame and turns presses on overlay widgets
//! into [`UiActionEvent`]s. Downstream systems (camera, picking) skip the
//! pointer when [`PointerState::captured`](crate::resources::input::PointerState)
//! is set.

use bevy_ecs::prelude::*;

use crate::events::ui::{UiAction, UiActionEvent};
use crate::resources::fieldingcatalog::FieldingCatalog;
use crate::resources::input::InputState;
use crate::resources::overlay::{OverlayHit, OverlayLayout, OverlayState, PointerOwner};
use crate::resources::windowsize::WindowSize;

/// Widget action triggered by a press on `hit`, if any.
pub fn action_for_hit(hit: OverlayHit) -> Option<UiAction> {
    match hit {
        OverlayHit::LabelsCheckbox => Some(UiAction::ToggleLabels),
        OverlayHit::LinesCheckbox => Some(UiAction::ToggleLines),
        OverlayHit::DropdownHeader => Some(UiAction::ToggleDropdown),
        OverlayHit::DropdownEntry(i) => Some(UiAction::FramePosition(i)),
        OverlayHit::ThemeButton => Some(UiAction::ToggleTheme),
        OverlayHit::CardClose => Some(UiAction::CloseCard),
        OverlayHit::WelcomeStart => Some(UiAction::StartExploring),
        OverlayHit::Panel | OverlayHit::Card | OverlayHit::WelcomeModal => None,
    }
}

pub fn overlay_interaction_system(
    mut input: ResMut<InputState>,
    mut overlay: ResMut<OverlayState>,
    window: Res<WindowSize>,
    catalog: Res<FieldingCatalog>,
    mut commands: Commands,
) {
    let layout = OverlayLayout::compute(&window, &overlay, catalog.len());
    let pointer = input.pointer;
    let hit = layout.hit_test(pointer.position);
    overlay.hovered = hit;

    let any_pressed = pointer.left.pressed || pointer.right.pressed;
    let any_down = pointer.left.down || pointer.right.down;
    if any_pressed {
        overlay.pointer_owner = if hit.is_some() {
            PointerOwner::Overlay
        } else {
            PointerOwner::Scene
        };
    }

    input.pointer.captured = match overlay.pointer_owner {
        PointerOwner::Overlay => true,
        PointerOwner::Scene => false,
        PointerOwner::Free => hit.is_some(),
    };

    if pointer.left.pressed {
        // a press anywhere but the dropdown folds the list away
        let on_dropdown = matches!(
            hit,
            Some(OverlayHit::DropdownHeader) | Some(OverlayHit::DropdownEntry(_))
        );
        if overlay.dropdown_open && !on_dropdown {
            overlay.dropdown_open = false;
        }
        if let Some(action) = hit.and_then(action_for_hit) {
            commands.trigger(UiActionEvent::new(action));
        }
    }

    if !any_down && !any_pressed {
        overlay.pointer_owner = PointerOwner::Free;
    }
}

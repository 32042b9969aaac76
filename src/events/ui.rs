//! Overlay and keyboard commands.
//!
//! Both the overlay widgets and the keyboard shortcuts end up as a
//! [`UiActionEvent`]; [`ui_action_observer`] is the single place that applies
//! them to the view toggles, theme, overlay and camera.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::fieldingcatalog::{FieldingCatalog, display_name};
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::overlay::OverlayState;
use crate::resources::theme::Theme;
use crate::resources::viewoptions::ViewOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleLabels,
    ToggleLines,
    ToggleTheme,
    ToggleDropdown,
    /// Frame the catalog entry at this index.
    FramePosition(usize),
    FrameNext,
    FramePrevious,
    CloseCard,
    StartExploring,
    /// Close the topmost open element: modal, dropdown list, then card.
    Back,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct UiActionEvent {
    pub action: UiAction,
}

impl UiActionEvent {
    pub fn new(action: UiAction) -> Self {
        Self { action }
    }
}

pub fn ui_action_observer(
    trigger: On<UiActionEvent>,
    mut view: ResMut<ViewOptions>,
    mut theme: ResMut<Theme>,
    mut overlay: ResMut<OverlayState>,
    mut camera: ResMut<OrbitCamera>,
    catalog: Res<FieldingCatalog>,
) {
    let action = trigger.event().action;
    debug!("UiActionEvent {:?}", action);

    match action {
        UiAction::ToggleLabels => {
            view.show_labels = !view.show_labels;
            info!("Labels {}", on_off(view.show_labels));
        }
        UiAction::ToggleLines => {
            view.show_lines = !view.show_lines;
            info!("Leader lines {}", on_off(view.show_lines));
        }
        UiAction::ToggleTheme => {
            theme.toggle();
            info!("Theme switched to {:?}", theme.mode);
        }
        UiAction::ToggleDropdown => {
            overlay.dropdown_open = !overlay.dropdown_open;
        }
        UiAction::FramePosition(index) => {
            frame(index, &catalog, &mut overlay, &mut camera);
        }
        UiAction::FrameNext => {
            if !catalog.is_empty() {
                let index = overlay.selected.map_or(0, |i| (i + 1) % catalog.len());
                frame(index, &catalog, &mut overlay, &mut camera);
            }
        }
        UiAction::FramePrevious => {
            if !catalog.is_empty() {
                let len = catalog.len();
                let index = overlay.selected.map_or(len - 1, |i| (i + len - 1) % len);
                frame(index, &catalog, &mut overlay, &mut camera);
            }
        }
        UiAction::CloseCard => overlay.close_card(),
        UiAction::StartExploring => {
            overlay.welcome_open = false;
        }
        UiAction::Back => {
            if overlay.welcome_open {
                overlay.welcome_open = false;
            } else if overlay.dropdown_open {
                overlay.dropdown_open = false;
            } else {
                overlay.close_card();
            }
        }
    }
}

fn frame(
    index: usize,
    catalog: &FieldingCatalog,
    overlay: &mut OverlayState,
    camera: &mut OrbitCamera,
) {
    overlay.dropdown_open = false;
    let Some(position) = catalog.at(index) else {
        warn!("No fielding position at index {}", index);
        return;
    };
    overlay.selected = Some(index);
    camera.frame_position(position.x, position.z);
    info!("Framing {}", display_name(&position.key));
}

fn on_off(flag: bool) -> &'static str {
    if flag { "shown" } else { "hidden" }
}

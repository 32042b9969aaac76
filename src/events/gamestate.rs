//! State transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter hook registered in [`StateHooks`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::statehooks::StateHooks;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending state transition should be applied.
///
/// If [`NextGameState`] holds [`Pending`], the observer updates
/// [`GameState`], runs the enter hook and clears the pending value; if it is
/// [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending state transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    hooks: Res<StateHooks>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get() {
        Pending(new_state) => {
            let old_state = game_state.get();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            next_game_state.reset();
            debug!("Exited {:?} state", old_state);
            on_state_enter(new_state, &mut commands, &hooks);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Run the enter hook registered for `state`, if any.
fn on_state_enter(state: GameStates, commands: &mut Commands, hooks: &StateHooks) {
    match hooks.enter_hook(state) {
        Some(system_id) => commands.run_system(system_id),
        None if state == GameStates::None => debug!("Entered None state"),
        None => warn!("No enter hook registered for {:?}", state),
    }
}

//! Registry of state enter hooks.
//!
//! Maps each [`GameStates`] value to a registered one-shot system that runs
//! when the state is entered. The state-change observer looks hooks up here
//! so states and their setup code stay decoupled.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

use crate::resources::gamestate::GameStates;

#[derive(Resource, Default)]
pub struct StateHooks {
    on_enter: FxHashMap<GameStates, SystemId>,
}

impl StateHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the system to run when `state` is entered, replacing any
    /// previous hook.
    pub fn on_enter(&mut self, state: GameStates, id: SystemId) {
        self.on_enter.insert(state, id);
    }

    pub fn enter_hook(&self, state: GameStates) -> Option<SystemId> {
        self.on_enter.get(&state).copied()
    }
}

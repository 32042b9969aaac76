//! Cricket field explorer library.
//!
//! Exposes the ECS components, resources, systems and events of the
//! explorer for use in integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;

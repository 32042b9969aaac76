//! Event types and observers.
//!
//! Events provide a decoupled way for systems to communicate without
//! direct dependencies on each other.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`switchfullscreen`] – toggle fullscreen on/off
//! - [`ui`] – overlay and keyboard commands
pub mod gamestate;
pub mod switchdebug;
pub mod switchfullscreen;
pub mod ui;

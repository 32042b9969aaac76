//! Fielding-position marker component.
//!
//! Each catalog entry gets one marker sphere. The marker breathes between
//! [`PULSE_MIN`] and [`PULSE_MAX`] while idle and is held at
//! [`HOVER_SCALE`] while the pointer is over it.

use bevy_ecs::prelude::Component;

/// Lower bound at which the pulse turns back up.
pub const PULSE_MIN: f32 = 0.8;
/// Upper bound at which the pulse turns back down.
pub const PULSE_MAX: f32 = 1.2;
/// Pulse change per reference (60 Hz) frame.
pub const PULSE_STEP: f32 = 0.02;
/// Displayed scale while hovered.
pub const HOVER_SCALE: f32 = 1.2;
/// Sphere radius at scale 1.
pub const MARKER_RADIUS: f32 = 0.3;
/// Height of the marker center above the ground.
pub const MARKER_HEIGHT: f32 = 0.5;

#[derive(Component, Clone, Debug)]
pub struct PositionMarker {
    /// Catalog key of the position.
    pub key: String,
    /// Current pulse scale.
    pub pulse: f32,
    /// +1.0 while growing, -1.0 while shrinking.
    pub pulse_direction: f32,
    /// Pointer is currently over this marker.
    pub hovered: bool,
}

impl PositionMarker {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pulse: 1.0,
            pulse_direction: 1.0,
            hovered: false,
        }
    }

    /// Advance the pulse by `frames` reference frames.
    ///
    /// The value moves first and the direction flips once it has crossed a
    /// bound, so it may overshoot a bound by at most one step.
    pub fn advance_pulse(&mut self, frames: f32) {
        self.pulse = (self.pulse + PULSE_STEP * frames * self.pulse_direction)
            .clamp(PULSE_MIN - PULSE_STEP, PULSE_MAX + PULSE_STEP);
        if self.pulse > PULSE_MAX {
            self.pulse_direction = -1.0;
        } else if self.pulse < PULSE_MIN {
            self.pulse_direction = 1.0;
        }
    }

    /// Scale the marker should be drawn and picked at.
    pub fn displayed_scale(&self) -> f32 {
        if self.hovered { HOVER_SCALE } else { self.pulse }
    }
}

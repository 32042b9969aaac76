//! Per-frame scene animation: drifting clouds and pulsing markers.
//!
//! Both step sizes are tuned per 60 Hz frame and scaled by
//! [`WorldTime::reference_frames`] so the motion speed does not depend on
//! the actual frame rate.

use bevy_ecs::prelude::*;

use crate::components::drift::Drift;
use crate::components::marker::PositionMarker;
use crate::components::scale::Scale;
use crate::components::worldposition::WorldPosition;
use crate::resources::worldtime::WorldTime;

/// Move every [`Drift`] entity along +X, wrapping at the far edge.
pub fn drift_system(time: Res<WorldTime>, mut query: Query<(&Drift, &mut WorldPosition)>) {
    let frames = time.reference_frames();
    for (drift, mut position) in query.iter_mut() {
        position.pos.x = drift.step(position.pos.x, frames);
    }
}

/// Advance marker pulses and write the displayed scale.
pub fn pulse_markers_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut PositionMarker, &mut Scale)>,
) {
    let frames = time.reference_frames();
    for (mut marker, mut scale) in query.iter_mut() {
        marker.advance_pulse(frames);
        scale.set_uniform(marker.displayed_scale());
    }
}

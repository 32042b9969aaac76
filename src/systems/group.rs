//! Group entity counting system.
//!
//! Counts entities per [`Group`] tag into [`GroupCounts`] for the debug
//! overlay. Scheduled only while debug mode is on.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::group::Group;
use crate::resources::groupcounts::GroupCounts;

pub fn update_group_counts_system(query_group: Query<&Group>, mut group_counts: ResMut<GroupCounts>) {
    let mut counts: FxHashMap<&'static str, usize> = FxHashMap::default();
    for group in query_group.iter() {
        *counts.entry(group.name()).or_insert(0) += 1;
    }
    // only mark the resource changed when a count moved
    if !group_counts.matches(&counts) {
        group_counts.set_all(counts);
    }
}

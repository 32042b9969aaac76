//! Per-layer entity counts shown by the debug overlay.
//!
//! Filled each frame by
//! [`update_group_counts_system`](crate::systems::group::update_group_counts_system)
//! from the [`Group`](crate::components::group::Group) tags.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Resource, Default)]
pub struct GroupCounts {
    counts: FxHashMap<&'static str, usize>,
}

impl GroupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities tagged `name`; 0 for unknown groups.
    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn matches(&self, counts: &FxHashMap<&'static str, usize>) -> bool {
        &self.counts == counts
    }

    pub fn set_all(&mut self, counts: FxHashMap<&'static str, usize>) {
        self.counts = counts;
    }

    /// Counts ordered by group name.
    pub fn sorted(&self) -> Vec<(&'static str, usize)> {
        let mut v: Vec<_> = self.counts.iter().map(|(k, c)| (*k, *c)).collect();
        v.sort_unstable_by_key(|(k, _)| *k);
        v
    }
}

//! At-most-once guard for intersection-triggered work (lazy images, skill
//! bars). The DOM layer also unobserves the element; the guard covers entries
//! already queued in the same callback batch.

#[cfg(test)]
#[path = "observe_once_test.rs"]
mod observe_once_test;

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct ObserveOnce<K> {
    fired: HashSet<K>,
}

impl<K: Eq + Hash> Default for ObserveOnce<K> {
    fn default() -> Self {
        Self { fired: HashSet::new() }
    }
}

impl<K: Eq + Hash> ObserveOnce<K> {
    /// `true` the first time `key` is claimed, `false` afterwards.
    pub fn claim(&mut self, key: K) -> bool {
        self.fired.insert(key)
    }

    #[must_use]
    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    #[must_use]
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

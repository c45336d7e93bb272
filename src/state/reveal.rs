//! Reveal-on-scroll registry.
//!
//! Every tracked element moves `Pending -> Scheduled -> Revealed` and never
//! back. Within one intersection batch, the entry at position `i` is delayed
//! by `i * stagger_ms`, so a group that scrolls into view together cascades in
//! batch order.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;
use std::hash::Hash;

use crate::consts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Observed, not yet in view.
    Pending,
    /// Entered the viewport; waiting out its stagger delay.
    Scheduled,
    /// Carries the visible class for good.
    Revealed,
}

/// Host instruction: add the visible class to `key` after `delay_ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSchedule<K> {
    pub key: K,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct RevealRegistry<K> {
    phases: HashMap<K, RevealPhase>,
    stagger_ms: u32,
}

impl<K: Eq + Hash + Clone> Default for RevealRegistry<K> {
    fn default() -> Self {
        Self::new(consts::REVEAL_STAGGER_MS)
    }
}

impl<K: Eq + Hash + Clone> RevealRegistry<K> {
    #[must_use]
    pub fn new(stagger_ms: u32) -> Self {
        Self { phases: HashMap::new(), stagger_ms }
    }

    /// Start tracking `key`. Already-tracked keys keep their phase.
    pub fn track(&mut self, key: K) {
        self.phases.entry(key).or_insert(RevealPhase::Pending);
    }

    #[must_use]
    pub fn phase(&self, key: &K) -> Option<RevealPhase> {
        self.phases.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Handle one intersection callback. `entries` holds `(key, is_intersecting)`
    /// in the order the observer delivered them.
    ///
    /// The stagger index is the entry's position in the whole batch, matching
    /// the observer's delivery order. Untracked, already scheduled and already
    /// revealed keys produce nothing.
    pub fn on_batch(&mut self, entries: &[(K, bool)]) -> Vec<RevealSchedule<K>> {
        let mut schedules = Vec::new();
        for (index, (key, intersecting)) in entries.iter().enumerate() {
            if !intersecting {
                continue;
            }
            let Some(phase) = self.phases.get_mut(key) else {
                continue;
            };
            if *phase != RevealPhase::Pending {
                continue;
            }
            *phase = RevealPhase::Scheduled;
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            schedules.push(RevealSchedule { key: key.clone(), delay_ms: index.saturating_mul(self.stagger_ms) });
        }
        schedules
    }

    /// A stagger timer fired. Returns `true` when the host should apply the
    /// visible class (first time only).
    pub fn mark_revealed(&mut self, key: &K) -> bool {
        let Some(phase) = self.phases.get_mut(key) else {
            return false;
        };
        if *phase != RevealPhase::Scheduled {
            return false;
        }
        *phase = RevealPhase::Revealed;
        true
    }
}

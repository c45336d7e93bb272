//! Deterministic timer queue for driving state machines in tests.
//!
//! Stands in for `setTimeout`: items are scheduled with a delay and released in
//! `(due time, insertion order)` order. Handlers may schedule or cancel more
//! items while the queue is being drained.

pub struct VirtualClock<T> {
    now_ms: u64,
    next_token: u64,
    queue: Vec<Scheduled<T>>,
}

struct Scheduled<T> {
    due_ms: u64,
    token: u64,
    item: T,
}

impl<T> Default for VirtualClock<T> {
    fn default() -> Self {
        Self { now_ms: 0, next_token: 0, queue: Vec::new() }
    }
}

impl<T> VirtualClock<T> {
    /// Schedule `item` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, item: T) {
        let token = self.next_token;
        self.next_token += 1;
        self.queue.push(Scheduled { due_ms: self.now_ms + u64::from(delay_ms), token, item });
    }

    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) {
        self.queue.retain(|s| !pred(&s.item));
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pop the earliest item due at or before `until_ms`, moving the clock to
    /// its due time.
    pub fn next_due(&mut self, until_ms: u64) -> Option<(u64, T)> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= until_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.token))
            .map(|(idx, _)| idx)?;
        let scheduled = self.queue.remove(idx);
        self.now_ms = scheduled.due_ms;
        Some((scheduled.due_ms, scheduled.item))
    }

    /// Move the clock forward to `until_ms` once everything due has drained.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

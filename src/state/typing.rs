//! Typewriter reveal for the hero heading.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts;

/// When typed frames are due, measured from the start of a run. The first
/// character appears as soon as the start delay elapses; each further
/// character follows one step later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingSchedule {
    pub start_delay_ms: u32,
    pub step_ms: u32,
}

impl Default for TypingSchedule {
    fn default() -> Self {
        Self { start_delay_ms: consts::TYPING_START_DELAY_MS, step_ms: consts::TYPING_STEP_MS }
    }
}

impl TypingSchedule {
    /// Due time of frame `index` (0-based).
    #[must_use]
    pub fn frame_due_ms(&self, index: usize) -> u64 {
        let steps = u64::try_from(index).unwrap_or(u64::MAX);
        u64::from(self.start_delay_ms).saturating_add(steps.saturating_mul(u64::from(self.step_ms)))
    }
}

/// Reveals `text` one character per step. Not self-restarting: a finished
/// typewriter stays finished; start over by building a new one.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0 }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Advance one character and return the text shown so far, or `None` when
    /// the whole text is already visible.
    pub fn next_frame(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}

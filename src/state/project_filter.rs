//! Project card filtering.
//!
//! A button group with exactly one active filter. Selecting a filter yields the
//! visibility of every card; the DOM layer plays the fade sequences.

#[cfg(test)]
#[path = "project_filter_test.rs"]
mod project_filter_test;

use crate::consts;

/// Whether `categories` (comma separated) admits `filter`.
#[must_use]
pub fn card_matches(categories: Option<&str>, filter: &str) -> bool {
    if filter == consts::FILTER_ALL {
        return true;
    }
    categories.is_some_and(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .any(|c| c == filter)
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVisibility {
    /// `display: block`, then the visible class after the fade-in delay.
    Show,
    /// Remove the visible class, then `display: none` after the fade-out delay.
    Hide,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub active: usize,
    pub cards: Vec<CardVisibility>,
}

#[derive(Clone, Debug)]
pub struct FilterGroup {
    filters: Vec<String>,
    cards: Vec<Option<String>>,
    active: usize,
}

impl FilterGroup {
    /// `filters` are the button values in document order; `cards` the
    /// category lists of the project cards. The first button starts active.
    #[must_use]
    pub fn new(filters: Vec<String>, cards: Vec<Option<String>>) -> Self {
        Self { filters, cards, active: 0 }
    }

    /// Start with button `index` active instead of the first. Out-of-range
    /// indexes keep the first button.
    #[must_use]
    pub fn with_active(mut self, index: usize) -> Self {
        if index < self.filters.len() {
            self.active = index;
        }
        self
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (self.active < self.filters.len()).then_some(self.active)
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.filters.get(self.active).map(String::as_str)
    }

    /// Activate button `index`. Out-of-range indexes change nothing.
    pub fn select(&mut self, index: usize) -> Option<FilterOutcome> {
        let filter = self.filters.get(index)?;
        let cards = self
            .cards
            .iter()
            .map(|categories| {
                if card_matches(categories.as_deref(), filter) {
                    CardVisibility::Show
                } else {
                    CardVisibility::Hide
                }
            })
            .collect();
        self.active = index;
        Some(FilterOutcome { active: index, cards })
    }
}

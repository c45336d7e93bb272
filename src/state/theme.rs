//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret the persisted value. Missing or unknown values mean light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle glyph: the moon offers dark mode, the sun offers light mode.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => consts::THEME_ICON_LIGHT,
            Self::Dark => consts::THEME_ICON_DARK,
        }
    }
}

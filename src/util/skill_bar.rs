//! Skill bar fill widths.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

/// Turn a `data-percentage` value into a CSS width such as `"85%"`.
///
/// Values are clamped to 0..=100; non-numeric input yields `None` and the bar
/// is left untouched.
#[must_use]
pub fn fill_width(raw: &str) -> Option<String> {
    let Ok(value) = raw.trim().trim_end_matches('%').trim().parse::<f64>() else {
        return None;
    };
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

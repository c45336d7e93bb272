//! Same-page anchor resolution and scroll target math.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id referenced by a same-page `href`, or `None` when the link does
/// not point at a fragment (or points at the bare `#`).
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Vertical scroll position that brings an element at `element_top` just
/// below the fixed header.
#[must_use]
pub fn scroll_target(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}

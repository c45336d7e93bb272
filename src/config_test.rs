use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_page_behavior() {
    let config = SiteConfig::default();
    assert_eq!(config.menu.breakpoint_px, 768.0);
    assert_eq!(config.navigation.header_offset_px, 80.0);
    assert_eq!(config.header.scrolled_after_px, 100.0);
    assert_eq!(config.header.hide_after_px, 200.0);
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.reveal.stagger_ms, 100);
    assert_eq!(config.notifications.reveal_delay_ms, 100);
    assert_eq!(config.notifications.auto_dismiss_ms, 5000);
    assert_eq!(config.notifications.exit_ms, 300);
    assert_eq!(config.service_worker_url, "/sw.js");
    assert_eq!(config.preload_images, vec!["images/profile.jpg".to_owned()]);
}

#[test]
fn optional_modules_are_dormant_by_default() {
    let flags = FeatureFlags::default();
    assert!(!flags.typing_effect);
    assert!(!flags.skill_bars);
    assert!(!flags.contact_form);
    assert!(!flags.project_filter);
    assert!(!flags.theme_toggle);
    assert!(flags.lazy_images);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn empty_block_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("   \n").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_block_overrides_only_named_fields() {
    let raw = r#"{
        "menu": { "breakpointPx": 900 },
        "features": { "themeToggle": true, "contactForm": true }
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.menu.breakpoint_px, 900.0);
    assert!(config.features.theme_toggle);
    assert!(config.features.contact_form);
    assert!(config.features.lazy_images);
    assert!(!config.features.typing_effect);
    assert_eq!(config.header, HeaderConfig::default());
}

#[test]
fn nested_sections_parse_camel_case() {
    let raw = r#"{
        "reveal": { "staggerMs": 50, "rootMargin": "0px" },
        "notifications": { "autoDismissMs": 2000 },
        "serviceWorkerUrl": "/worker.js",
        "preloadImages": []
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.reveal.stagger_ms, 50);
    assert_eq!(config.reveal.root_margin, "0px");
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.notifications.auto_dismiss_ms, 2000);
    assert_eq!(config.notifications.exit_ms, 300);
    assert_eq!(config.service_worker_url, "/worker.js");
    assert!(config.preload_images.is_empty());
}

#[test]
fn malformed_block_is_a_config_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = SiteConfig::from_json(r#"{ "menu": { "breakpointPx": "wide" } }"#).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}

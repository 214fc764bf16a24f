use helix_wasm::config::HelixConfig;
use helix_wasm::error::HelixError;
use helix_wasm::theme::{Plugin, ThemeDescriptor};

#[test]
fn config_defaults() {
    let config = HelixConfig::default();
    assert_eq!(config.canvas_id, "helix-canvas");
    assert_eq!(config.narrow_screen_query, "(max-width: 768px)");
    assert_eq!(config.reduced_motion_query, "(prefers-reduced-motion: reduce)");
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn partial_config_keeps_defaults() {
    let config = HelixConfig::from_json(r#"{ "canvas_id": "hero", "log_level": "debug" }"#).unwrap();
    assert_eq!(config.canvas_id, "hero");
    assert_eq!(config.level(), log::Level::Debug);
    assert_eq!(config.narrow_screen_query, HelixConfig::default().narrow_screen_query);
}

#[test]
fn bad_config_is_an_error() {
    assert!(matches!(
        HelixConfig::from_json("{ canvas_id: }"),
        Err(HelixError::Config(_))
    ));
}

#[test]
fn unknown_level_falls_back_to_info() {
    let config = HelixConfig {
        log_level: "loud".to_string(),
        ..HelixConfig::default()
    };
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn theme_palette() {
    let theme = ThemeDescriptor::default();
    assert_eq!(theme.color("bg"), Some("#0B0E14"));
    assert_eq!(theme.color("muted-subtle"), Some("#6B7280"));
    assert_eq!(theme.color("accent"), Some("#7AA2F7"));
    assert_eq!(theme.color("nope"), None);
    assert_eq!(theme.border_radius["DEFAULT"], "0.375rem");
    assert_eq!(theme.max_width["measure"], "68ch");
    assert_eq!(theme.font_family["sans"][0], "Inter");
    assert_eq!(
        theme.plugins,
        vec![Plugin::Typography { modifiers: vec![] }]
    );
}

#[test]
fn theme_json_shape() {
    let json = ThemeDescriptor::default().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["darkMode"], "media");
    assert_eq!(value["fontFamily"]["serif"][1], "Georgia");
    assert_eq!(value["plugins"][0]["name"], "typography");
    assert!(value["plugins"][0]["modifiers"].as_array().unwrap().is_empty());

    let back = ThemeDescriptor::from_json(&json).unwrap();
    assert_eq!(back, ThemeDescriptor::default());
}

#[test]
fn typography_modifiers_default_empty() {
    let json = r##"{
        "content": [], "darkMode": "class", "colors": {"bg": "#000000"},
        "fontFamily": {}, "borderRadius": {}, "maxWidth": {},
        "plugins": [{ "name": "typography" }]
    }"##;
    let theme = ThemeDescriptor::from_json(json).unwrap();
    assert_eq!(theme.plugins, vec![Plugin::Typography { modifiers: vec![] }]);
    assert_eq!(theme.color("bg"), Some("#000000"));
}

use dom_tagger::config::{TaggerConfig, load_config, parse_config};

#[test]
fn missing_file_yields_defaults() {
    let config = load_config(Some("/definitely/not/here/dom-tagger.yaml"));
    assert_eq!(config.overlay.color, "#000000");
    assert_eq!(config.overlay.min_visibility_ratio, 0.5);
    assert_eq!(config.settle.quiet_ms, 800);
    assert_eq!(config.settle.timeout_ms, 10_000);
}

#[test]
fn partial_yaml_keeps_defaults_for_the_rest() {
    let yaml = "overlay:\n  color: \"#ff0000\"\n";
    let config = parse_config("inline", yaml).expect("valid yaml");

    assert_eq!(config.overlay.color, "#ff0000");
    assert_eq!(config.overlay.min_visibility_ratio, 0.5, "Unset field keeps default");
    assert_eq!(config.settle.quiet_ms, 800, "Unset section keeps defaults");
}

#[test]
fn full_yaml_overrides_everything() {
    let yaml = "overlay:\n  color: \"#00ff00\"\n  min_visibility_ratio: 0.25\nsettle:\n  quiet_ms: 200\n  timeout_ms: 2000\n";
    let config = parse_config("inline", yaml).expect("valid yaml");

    assert_eq!(config.overlay.min_visibility_ratio, 0.25);
    assert_eq!(config.settle.quiet_ms, 200);
    assert_eq!(config.settle.timeout_ms, 2000);
}

#[test]
fn malformed_yaml_is_an_error_in_strict_mode() {
    let err = parse_config("bad.yaml", "overlay: [not, a, map").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bad.yaml"), "Error names the offending file: {message}");
}

#[test]
fn default_config_is_usable_as_is() {
    let config = TaggerConfig::default();
    assert!(config.overlay.min_visibility_ratio > 0.0);
    assert!(config.settle.quiet_ms < config.settle.timeout_ms);
}

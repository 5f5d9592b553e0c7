use super::*;

#[test]
fn empty_object_is_the_default_config() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let cfg = EngineConfig::from_json_str(
        r#"{
            "initial_timeline": 0.67,
            "slider": { "variant": "compact" },
            "blend": { "transition_ms": 0, "sizing": { "mode": "intrinsic" } }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.initial_timeline, 0.67);
    assert_eq!(cfg.slider.variant, SliderVariant::Compact);
    assert_eq!(cfg.slider.transition_ms, 300);
    assert_eq!(cfg.blend.sizing, Sizing::Intrinsic);
}

#[test]
fn out_of_range_initial_value_is_clamped_by_the_container() {
    let cfg = EngineConfig::from_json_str(r#"{ "initial_timeline": 4.0 }"#).unwrap();
    assert_eq!(cfg.build_state().timeline(), 1.0);
}

#[test]
fn invalid_configs_are_rejected() {
    let bad_ratio = r#"{ "blend": { "sizing": { "mode": "aspect_ratio", "ratio": -1 } } }"#;
    assert!(matches!(
        EngineConfig::from_json_str(bad_ratio),
        Err(DaylightError::Config(_))
    ));

    let swapped = EngineConfig {
        themes: ThemePair {
            light: crate::state::theme::Theme::dark(),
            dark: crate::state::theme::Theme::light(),
        },
        ..EngineConfig::default()
    };
    assert!(swapped.validate().is_err());

    assert!(matches!(
        EngineConfig::from_json_str("{ not json"),
        Err(DaylightError::Serde(_))
    ));
}

#[test]
fn builders_apply_transition_settings() {
    let cfg = EngineConfig::from_json_str(
        r#"{ "slider": { "transition_ms": 0 }, "blend": { "transition_ms": 120 } }"#,
    )
    .unwrap();
    let state = cfg.build_state();
    let scope = Scope::provide(state);
    let slider = cfg.build_slider(&scope).unwrap();
    assert!(slider.frame().transition.is_disabled());
    let blend = cfg.build_blend(&scope, None, None).unwrap();
    assert_eq!(blend.transition(), TransitionMode::Smooth { duration_ms: 120 });
}

#[test]
fn missing_file_is_a_config_error() {
    let err = EngineConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, DaylightError::Config(_)));
}

use balanz_charts::api::{AnimationTiming, RingStyle, WidgetEngineConfig, WidgetSpec};
use balanz_charts::animation::{Easing, RepeatPolicy};
use balanz_charts::core::Viewport;

#[test]
fn config_round_trips_through_json() {
    let config = WidgetEngineConfig::new(Viewport::new(390, 844)).with_default_timing(
        AnimationTiming::new(800.0)
            .with_delay_ms(120.0)
            .with_easing(Easing::EaseInOut),
    );

    let json = config.to_json_pretty().expect("serialize");
    let parsed = WidgetEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn minimal_json_fills_in_default_timing() {
    let parsed = WidgetEngineConfig::from_json_str(
        r#"{ "viewport": { "width": 390, "height": 844 } }"#,
    )
    .expect("parse minimal config");

    assert_eq!(parsed.viewport, Viewport::new(390, 844));
    assert_eq!(parsed.default_timing.duration_ms, 1_200.0);
    assert_eq!(parsed.default_timing.delay_ms, 0.0);
    assert_eq!(parsed.default_timing.easing, Easing::EaseOut);
    assert_eq!(parsed.default_timing.repeat, RepeatPolicy::None);
}

#[test]
fn malformed_json_is_reported_as_config_error() {
    let result = WidgetEngineConfig::from_json_str("{ not json }");
    assert!(result.is_err());
}

#[test]
fn easing_identifiers_use_kebab_case() {
    let json = serde_json::to_string(&Easing::EaseOutCubic).expect("serialize easing");
    assert_eq!(json, "\"ease-out-cubic\"");

    let parsed: Easing = serde_json::from_str("\"ease-in-out\"").expect("parse easing");
    assert_eq!(parsed, Easing::EaseInOut);
}

#[test]
fn widget_specs_round_trip_with_a_kind_tag() {
    let spec = WidgetSpec::Ring {
        style: RingStyle::new(100.0, 100.0, 80.0).with_sweep(-135.0, 270.0),
        current: 7_500.0,
        goal: 10_000.0,
        timing: Some(AnimationTiming::new(600.0)),
    };

    let json = serde_json::to_string(&spec).expect("serialize spec");
    assert!(json.contains("\"kind\":\"ring\""));

    let parsed: WidgetSpec = serde_json::from_str(&json).expect("parse spec");
    assert_eq!(parsed, spec);
}

use chart_grammar::api::{
    ScaleOverride, VIEW_CONFIG_JSON_SCHEMA_V1, ViewConfig, ViewConfigJsonContractV1, ViewLayout,
};
use chart_grammar::coordinate::{PolarOptions, TransformOptions};
use chart_grammar::core::Value;
use chart_grammar::scale::ScaleKind;

fn sample_config() -> ViewConfig {
    let mut config = ViewConfig {
        layout: ViewLayout::new(0.0, 0.0, 800.0, 600.0),
        transforms: vec![TransformOptions::Polar(
            PolarOptions::default().with_radius(0.3, 1.0),
        )],
        ..ViewConfig::default()
    };
    config.scales.insert(
        "color".to_owned(),
        ScaleOverride {
            kind: Some(ScaleKind::Ordinal),
            range: Some(vec![Value::from("#ff0000"), Value::from("#00ff00")]),
            ..ScaleOverride::default()
        },
    );
    config
}

#[test]
fn contract_v1_round_trip() {
    let config = sample_config();
    let json = config.to_json_contract_v1_pretty().expect("serialize");

    let envelope: ViewConfigJsonContractV1 = serde_json::from_str(&json).expect("envelope");
    assert_eq!(envelope.schema_version, VIEW_CONFIG_JSON_SCHEMA_V1);

    let restored = ViewConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn bare_payload_is_accepted() {
    let config = sample_config();
    let json = config.to_json_pretty().expect("serialize");
    let restored = ViewConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = ViewConfig::from_json_compat_str(
        r#"{"layout":{"width":800,"paddingTop":10},"transforms":[{"kind":"transpose"}]}"#,
    )
    .expect("parse");

    assert_eq!(config.layout.width, 800.0);
    assert_eq!(config.layout.height, 480.0);
    assert_eq!(config.layout.padding_top, 10.0);
    assert_eq!(config.layout.padding_left, 45.0);
    assert_eq!(config.transforms, vec![TransformOptions::Transpose]);
    assert!(config.scales.is_empty());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = ViewConfig::from_json_compat_str(r#"{"schema_version":2,"config":{}}"#)
        .expect_err("version 2 is unknown");
    assert_eq!(
        err.to_string(),
        "invalid data: unsupported view config schema version: 2"
    );
}

#[test]
fn malformed_payload_is_invalid_data() {
    let err = ViewConfig::from_json_compat_str(r#"{"layout":"wide"}"#).expect_err("bad layout");
    assert!(err.to_string().starts_with("invalid data: failed to parse view config"));
}

//! Layer precedence tests.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;
use crate::EventLensConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"base_url": "http://default"})), ("file", json!({"base_url": "http://file"}))],
    "http://file",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"base_url": "http://file"})), ("environment", json!({"base_url": "http://env"}))],
    "http://env",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"base_url": "http://env"})), ("cli", json!({"base_url": "http://cli"}))],
    "http://cli",
    "CLI should override environment"
)]
fn base_url_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.base_url, expected, "{message}");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        (
            "file",
            json!({"department": "Cardiology", "page_size": 5, "cme": true}),
        ),
        ("cli", json!({"department": "Oncology"})),
    ]);

    assert_eq!(config.department.as_deref(), Some("Oncology"));
    assert_eq!(config.page_size, 5, "file page size should be preserved");
    assert!(config.cme, "file cme flag should be preserved");
}

#[rstest]
fn defaults_apply_when_no_sources_provide_values() {
    let defaults =
        serde_json::to_value(EventLensConfig::default()).expect("defaults should serialise");
    let config = build_config_from_layers(&[("defaults", defaults)]);

    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.page_size, 20);
    assert_eq!(config.timeout_seconds, 10);
    assert!(config.keyword.is_none());
    assert!(!config.list);
}

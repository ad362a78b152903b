//! Behavioural tests for CLI configuration loading.

use eventlens::{EventLensConfig, OperationMode};
use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};

/// State for CLI configuration scenarios.
///
/// Layers are kept as JSON values since `MergeComposer` doesn't implement
/// Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    defaults_layer: Slot<Value>,
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    config: Slot<EventLensConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Builds and stores the configuration from the accumulated layers.
fn build_config(state: &ConfigState) {
    let mut composer = MergeComposer::new();

    if let Some(defaults) = state.defaults_layer.get() {
        composer.push_defaults(defaults);
    }
    if let Some(env) = state.env_layer.get() {
        composer.push_environment(env);
    }
    if let Some(cli) = state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match EventLensConfig::merge_from_layers(composer.layers()) {
        Ok(config) => state.config.set(config),
        Err(error) => panic!("failed to merge configuration: {error}"),
    }
}

fn built_config(state: &ConfigState) -> EventLensConfig {
    state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"))
}

// --- Given steps ---

#[given("the built-in configuration defaults")]
fn built_in_defaults(config_state: &ConfigState) {
    let defaults = serde_json::to_value(EventLensConfig::default())
        .unwrap_or_else(|error| panic!("defaults should serialise: {error}"));
    config_state.defaults_layer.set(defaults);
}

#[given("a configuration with environment base_url {url}")]
fn env_base_url(config_state: &ConfigState, url: String) {
    config_state
        .env_layer
        .set(json!({"base_url": url.trim_matches('"')}));
}

// --- When steps ---

#[when("the CLI receives no arguments")]
fn cli_receives_nothing(config_state: &ConfigState) {
    build_config(config_state);
}

#[when("the CLI receives base_url {url}")]
fn cli_receives_base_url(config_state: &ConfigState, url: String) {
    config_state
        .cli_layer
        .set(json!({"base_url": url.trim_matches('"')}));
    build_config(config_state);
}

#[when("the CLI receives keyword {keyword} with CME only and page size {size:u32}")]
fn cli_receives_filters(config_state: &ConfigState, keyword: String, size: u32) {
    config_state
        .cli_layer
        .set(json!({"keyword": keyword, "cme": true, "page_size": size}));
    build_config(config_state);
}

#[when("the CLI receives page size {size:u32}")]
fn cli_receives_page_size(config_state: &ConfigState, size: u32) {
    config_state.cli_layer.set(json!({"page_size": size}));
    build_config(config_state);
}

#[when("the CLI receives event id {id:u64} and the list flag")]
fn cli_receives_event_id(config_state: &ConfigState, id: u64) {
    config_state
        .cli_layer
        .set(json!({"event_id": id, "list": true}));
    build_config(config_state);
}

// --- Then steps ---

#[then("the configuration base_url is {expected}")]
fn assert_base_url(config_state: &ConfigState, expected: String) {
    let config = built_config(config_state);
    assert_eq!(config.base_url, expected.trim_matches('"'), "base_url mismatch");
}

#[then("the initial page size is {expected:u32}")]
fn assert_page_size(config_state: &ConfigState, expected: u32) {
    let filters = built_config(config_state)
        .initial_filter_state()
        .unwrap_or_else(|error| panic!("filters should build: {error}"));
    assert_eq!(filters.page_size().get(), expected, "page size mismatch");
}

#[then("the initial keyword is {expected}")]
fn assert_keyword(config_state: &ConfigState, expected: String) {
    let filters = built_config(config_state)
        .initial_filter_state()
        .unwrap_or_else(|error| panic!("filters should build: {error}"));
    assert_eq!(filters.keyword(), expected, "keyword mismatch");
}

#[then("the initial filters request CME-eligible events only")]
fn assert_cme_only(config_state: &ConfigState) {
    let filters = built_config(config_state)
        .initial_filter_state()
        .unwrap_or_else(|error| panic!("filters should build: {error}"));
    assert!(filters.cme_only(), "expected the CME-only filter to be set");
}

#[then("the operation mode is tui")]
fn assert_tui_mode(config_state: &ConfigState) {
    assert_eq!(built_config(config_state).operation_mode(), OperationMode::Tui);
}

#[then("the operation mode is event detail")]
fn assert_detail_mode(config_state: &ConfigState) {
    assert_eq!(
        built_config(config_state).operation_mode(),
        OperationMode::EventDetail
    );
}

#[then("validating the configuration fails mentioning {field}")]
fn assert_validation_fails(config_state: &ConfigState, field: String) {
    let Err(error) = built_config(config_state).validate() else {
        panic!("validation should fail");
    };
    assert!(
        error.to_string().contains(field.trim()),
        "expected error mentioning `{field}`, got `{error}`"
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn defaults_open_the_tui(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn env_base_url_used(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn cli_base_url_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn cli_filters_seed_state(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn unsupported_page_size_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 5)]
fn non_http_base_url_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 6)]
fn event_id_selects_detail_mode(config_state: ConfigState) {
    let _ = config_state;
}

use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.retailer, "Smart & Final");
    assert_eq!(
        cfg.url_template,
        "https://www.smartandfinal.com/sm/pickup/rsid/{store_id}/circular"
    );
    assert_eq!(cfg.store_id, "522");
    assert_eq!(cfg.request_timeout_secs, 15);
    assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.debug_html_path.as_deref(),
        Some(Path::new("circular_debug.html"))
    );
    assert!(cfg.selectors_path.is_none());
}

#[test]
fn retailer_override() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_RETAILER", "Grocery Outlet");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.retailer, "Grocery Outlet");
}

#[test]
fn blank_retailer_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_RETAILER", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIRCULAR_RETAILER"),
        "expected InvalidEnvVar(CIRCULAR_RETAILER), got: {result:?}"
    );
}

#[test]
fn url_template_without_placeholder_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_URL_TEMPLATE", "https://example.com/circular");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIRCULAR_URL_TEMPLATE"),
        "expected InvalidEnvVar(CIRCULAR_URL_TEMPLATE), got: {result:?}"
    );
}

#[test]
fn store_id_override() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_STORE_ID", "731");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.store_id, "731");
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIRCULAR_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CIRCULAR_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIRCULAR_REQUEST_TIMEOUT_SECS"
    ));
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn empty_debug_html_path_disables_dump() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_DEBUG_HTML_PATH", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.debug_html_path.is_none());
}

#[test]
fn selectors_path_is_read_when_set() {
    let mut map = HashMap::new();
    map.insert("CIRCULAR_SELECTORS_PATH", "./config/selectors.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.selectors_path.as_deref(),
        Some(Path::new("./config/selectors.yaml"))
    );
}

use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

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
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TABLESCOUT_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.state_path, PathBuf::from("./.tablescout/state.json"));
    assert!(cfg.catalog_path.is_none());
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.selection_latency_ms, 2000);
    assert_eq!(cfg.auth_latency_ms, 1000);
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.retry_backoff_base_ms, 500);
}

#[test]
fn api_url_override() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_API_URL", "http://localhost:8000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
}

#[test]
fn api_url_without_scheme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_API_URL", "localhost:8000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLESCOUT_API_URL"),
        "expected InvalidEnvVar(TABLESCOUT_API_URL), got: {result:?}"
    );
}

#[test]
fn catalog_path_blank_is_ignored() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_CATALOG_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn catalog_path_override() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_CATALOG_PATH", "./config/catalog.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("./config/catalog.yaml")));
}

#[test]
fn selection_latency_override() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_SELECTION_LATENCY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.selection_latency_ms, 0);
}

#[test]
fn selection_latency_invalid() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_SELECTION_LATENCY_MS", "two seconds");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLESCOUT_SELECTION_LATENCY_MS"),
        "expected InvalidEnvVar(TABLESCOUT_SELECTION_LATENCY_MS), got: {result:?}"
    );
}

#[test]
fn max_retries_override() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_MAX_RETRIES", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_retries, 5);
}

#[test]
fn max_retries_invalid() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLESCOUT_MAX_RETRIES"),
        "expected InvalidEnvVar(TABLESCOUT_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("TABLESCOUT_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLESCOUT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TABLESCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

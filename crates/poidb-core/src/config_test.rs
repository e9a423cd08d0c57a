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

fn assert_invalid(map: &HashMap<&str, &str>, expected_var: &str) {
    let result = build_app_config(lookup_from_map(map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == expected_var),
        "expected InvalidEnvVar({expected_var}), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert!(cfg.places_api_key.is_none());
    assert_eq!(
        cfg.places_base_url,
        "https://maps.googleapis.com/maps/api/place/"
    );
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.plan_path.is_none());
    assert_eq!(cfg.output_path, Path::new("pittsburgh_restaurants.json"));
    assert_eq!(cfg.search_radius_m, 2000);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "poidb/0.1 (places-collector)");
    assert_eq!(cfg.max_concurrent_details, 3);
    assert_eq!(cfg.detail_batch_size, 5);
    assert_eq!(cfg.batch_delay_ms, 1000);
    assert_eq!(cfg.page_token_delay_ms, 2000);
    assert_eq!(cfg.category_delay_ms, 1000);
}

#[test]
fn api_key_is_read_but_never_validated() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.places_api_key.as_deref(), Some(""));
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "super-secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-key"), "{rendered}");
    assert!(rendered.contains("[redacted]"), "{rendered}");
}

#[test]
fn overrides_are_applied() {
    let mut map = HashMap::new();
    map.insert("POIDB_PLAN_PATH", "./config/areas.yaml");
    map.insert("POIDB_OUTPUT_PATH", "out/places.json");
    map.insert("POIDB_SEARCH_RADIUS_M", "1500");
    map.insert("POIDB_MAX_CONCURRENT_DETAILS", "8");
    map.insert("POIDB_DETAIL_BATCH_SIZE", "10");
    map.insert("POIDB_BATCH_DELAY_MS", "0");
    map.insert("POIDB_PAGE_TOKEN_DELAY_MS", "2500");
    map.insert("POIDB_CATEGORY_DELAY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.plan_path.as_deref(), Some(Path::new("./config/areas.yaml")));
    assert_eq!(cfg.output_path, Path::new("out/places.json"));
    assert_eq!(cfg.search_radius_m, 1500);
    assert_eq!(cfg.max_concurrent_details, 8);
    assert_eq!(cfg.detail_batch_size, 10);
    assert!(cfg.batch_delay().is_zero());
    assert_eq!(cfg.page_token_delay().as_millis(), 2500);
    assert!(cfg.category_delay().is_zero());
}

#[test]
fn search_radius_invalid() {
    let mut map = HashMap::new();
    map.insert("POIDB_SEARCH_RADIUS_M", "not-a-number");
    assert_invalid(&map, "POIDB_SEARCH_RADIUS_M");
}

#[test]
fn search_radius_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("POIDB_SEARCH_RADIUS_M", "0");
    assert_invalid(&map, "POIDB_SEARCH_RADIUS_M");
}

#[test]
fn search_radius_above_provider_limit_is_rejected() {
    let mut map = HashMap::new();
    map.insert("POIDB_SEARCH_RADIUS_M", "50001");
    assert_invalid(&map, "POIDB_SEARCH_RADIUS_M");
}

#[test]
fn max_concurrent_details_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("POIDB_MAX_CONCURRENT_DETAILS", "0");
    assert_invalid(&map, "POIDB_MAX_CONCURRENT_DETAILS");
}

#[test]
fn detail_batch_size_invalid() {
    let mut map = HashMap::new();
    map.insert("POIDB_DETAIL_BATCH_SIZE", "five");
    assert_invalid(&map, "POIDB_DETAIL_BATCH_SIZE");
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("POIDB_REQUEST_TIMEOUT_SECS", "-1");
    assert_invalid(&map, "POIDB_REQUEST_TIMEOUT_SECS");
}

#[test]
fn page_token_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("POIDB_PAGE_TOKEN_DELAY_MS", "soon");
    assert_invalid(&map, "POIDB_PAGE_TOKEN_DELAY_MS");
}

use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Largest radius the Nearby Search endpoint accepts, in meters.
const MAX_SEARCH_RADIUS_M: u32 = 50_000;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<usize>() {
            Ok(0) => Err(invalid(var, "must be at least 1".to_string())),
            Ok(value) => Ok(value),
            Err(e) => Err(invalid(var, e.to_string())),
        }
    };

    let places_api_key = lookup("PLACES_API_KEY").ok();
    let places_base_url = or_default(
        "POIDB_PLACES_BASE_URL",
        "https://maps.googleapis.com/maps/api/place/",
    );
    let log_level = or_default("POIDB_LOG_LEVEL", "info");
    let plan_path = lookup("POIDB_PLAN_PATH").ok().map(PathBuf::from);
    let output_path = PathBuf::from(or_default(
        "POIDB_OUTPUT_PATH",
        "pittsburgh_restaurants.json",
    ));

    let search_radius_m = parse_u32("POIDB_SEARCH_RADIUS_M", "2000")?;
    if search_radius_m == 0 || search_radius_m > MAX_SEARCH_RADIUS_M {
        return Err(invalid(
            "POIDB_SEARCH_RADIUS_M",
            format!("must be between 1 and {MAX_SEARCH_RADIUS_M}"),
        ));
    }

    let request_timeout_secs = parse_u64("POIDB_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("POIDB_USER_AGENT", "poidb/0.1 (places-collector)");
    let max_concurrent_details = parse_positive_usize("POIDB_MAX_CONCURRENT_DETAILS", "3")?;
    let detail_batch_size = parse_positive_usize("POIDB_DETAIL_BATCH_SIZE", "5")?;
    let batch_delay_ms = parse_u64("POIDB_BATCH_DELAY_MS", "1000")?;
    let page_token_delay_ms = parse_u64("POIDB_PAGE_TOKEN_DELAY_MS", "2000")?;
    let category_delay_ms = parse_u64("POIDB_CATEGORY_DELAY_MS", "1000")?;

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        log_level,
        plan_path,
        output_path,
        search_radius_m,
        request_timeout_secs,
        user_agent,
        max_concurrent_details,
        detail_batch_size,
        batch_delay_ms,
        page_token_delay_ms,
        category_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

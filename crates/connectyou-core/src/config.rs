use crate::app_config::{AppConfig, DEFAULT_API_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // Blank values count as unset so `FOO=` in a .env file falls back cleanly.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, raw: &str| -> Result<u64, ConfigError> {
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = or_default("CONNECTYOU_API_URL", DEFAULT_API_URL);
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CONNECTYOU_API_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{api_base_url}'"),
        });
    }

    let map_access_token = optional("CONNECTYOU_MAP_TOKEN");
    let log_level = or_default("CONNECTYOU_LOG_LEVEL", "info");
    let search_debounce_ms = parse_u64(
        "CONNECTYOU_SEARCH_DEBOUNCE_MS",
        &or_default("CONNECTYOU_SEARCH_DEBOUNCE_MS", "300"),
    )?;
    let request_timeout_secs = optional("CONNECTYOU_REQUEST_TIMEOUT_SECS")
        .map(|raw| parse_u64("CONNECTYOU_REQUEST_TIMEOUT_SECS", &raw))
        .transpose()?;
    let user_agent = or_default("CONNECTYOU_USER_AGENT", "connectyou/0.1 (store-locator)");
    let stores_path = optional("CONNECTYOU_STORES_PATH").map(PathBuf::from);

    Ok(AppConfig {
        api_base_url,
        map_access_token,
        log_level,
        search_debounce_ms,
        request_timeout_secs,
        user_agent,
        stores_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

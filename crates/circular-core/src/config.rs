use crate::app_config::{AppConfig, STORE_ID_PLACEHOLDER};
use crate::ConfigError;

const DEFAULT_RETAILER: &str = "Smart & Final";
const DEFAULT_URL_TEMPLATE: &str = "https://www.smartandfinal.com/sm/pickup/rsid/{store_id}/circular";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_DEBUG_HTML_PATH: &str = "circular_debug.html";

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
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let retailer = or_default("CIRCULAR_RETAILER", DEFAULT_RETAILER);
    if retailer.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CIRCULAR_RETAILER".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let url_template = or_default("CIRCULAR_URL_TEMPLATE", DEFAULT_URL_TEMPLATE);
    if !url_template.contains(STORE_ID_PLACEHOLDER) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CIRCULAR_URL_TEMPLATE".to_string(),
            reason: format!("must contain the {STORE_ID_PLACEHOLDER} placeholder"),
        });
    }

    let store_id = or_default("CIRCULAR_STORE_ID", "522");
    let request_timeout_secs = parse_u64("CIRCULAR_REQUEST_TIMEOUT_SECS", "15")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CIRCULAR_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("CIRCULAR_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("CIRCULAR_LOG_LEVEL", "info");

    // An explicitly empty path turns the debug dump off.
    let debug_html_path = Some(or_default(
        "CIRCULAR_DEBUG_HTML_PATH",
        DEFAULT_DEBUG_HTML_PATH,
    ))
    .filter(|p| !p.trim().is_empty())
    .map(PathBuf::from);

    let selectors_path = lookup("CIRCULAR_SELECTORS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        retailer,
        url_template,
        store_id,
        request_timeout_secs,
        user_agent,
        log_level,
        debug_html_path,
        selectors_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

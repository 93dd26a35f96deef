use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("must be a non-negative finite number, got {raw}"),
            });
        }
        Ok(value)
    };

    let catalog_url = require("GEOSNAP_CATALOG_URL")?;
    let catalog_api_key = require("GEOSNAP_CATALOG_API_KEY")?;

    let log_level = or_default("GEOSNAP_LOG_LEVEL", "info");
    let rounds_per_game = parse_usize("GEOSNAP_ROUNDS_PER_GAME", "5")?;
    let min_separation_km = parse_f64("GEOSNAP_MIN_SEPARATION_KM", "1.0")?;
    let perfect_radius_km = parse_f64("GEOSNAP_PERFECT_RADIUS_KM", "0.1")?;
    let max_points = parse_u32("GEOSNAP_MAX_POINTS", "5000")?;
    let max_pages = parse_usize("GEOSNAP_MAX_PAGES", "20")?;
    let page_size = parse_u32("GEOSNAP_PAGE_SIZE", "100")?;
    let request_timeout_secs = parse_u64("GEOSNAP_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        catalog_url,
        catalog_api_key,
        log_level,
        rounds_per_game,
        min_separation_km,
        perfect_radius_km,
        max_points,
        max_pages,
        page_size,
        request_timeout_secs,
    })
}

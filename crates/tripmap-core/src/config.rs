use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const DEFAULT_VISITED_HUE: &str = "hsl(210, 70%, 45%)";
pub const DEFAULT_BUCKET_LIST_HUE: &str = "hsl(15, 85%, 65%)";

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
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u8>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("TRIPMAP_ENV", "development"))?;
    let log_level = or_default("TRIPMAP_LOG_LEVEL", "info");
    let places_path = PathBuf::from(or_default("TRIPMAP_PLACES_PATH", "./config/places.yaml"));

    let tile_url_template = or_default("TRIPMAP_TILE_URL", DEFAULT_TILE_URL);
    let tile_attribution = or_default("TRIPMAP_TILE_ATTRIBUTION", DEFAULT_TILE_ATTRIBUTION);
    let tile_max_zoom = parse_u8("TRIPMAP_TILE_MAX_ZOOM", "19")?;

    let viewport_padding = parse_f64("TRIPMAP_VIEWPORT_PADDING", "0.2")?;
    if !viewport_padding.is_finite() || viewport_padding < 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIPMAP_VIEWPORT_PADDING".to_string(),
            reason: format!("padding must be a finite non-negative number, got {viewport_padding}"),
        });
    }

    let single_marker_zoom = parse_u8("TRIPMAP_SINGLE_MARKER_ZOOM", "10")?;
    if single_marker_zoom > tile_max_zoom {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIPMAP_SINGLE_MARKER_ZOOM".to_string(),
            reason: format!("zoom {single_marker_zoom} exceeds tile max zoom {tile_max_zoom}"),
        });
    }

    let visited_hue = or_default("TRIPMAP_VISITED_HUE", DEFAULT_VISITED_HUE);
    let bucket_list_hue = or_default("TRIPMAP_BUCKET_LIST_HUE", DEFAULT_BUCKET_LIST_HUE);

    Ok(AppConfig {
        env,
        log_level,
        places_path,
        tile_url_template,
        tile_attribution,
        tile_max_zoom,
        viewport_padding,
        single_marker_zoom,
        visited_hue,
        bucket_list_hue,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRIPMAP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

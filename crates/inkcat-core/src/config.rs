use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_PRIMARY_FEED: &str = "./data/listas_brutas/lista_json_ld.json";
pub const DEFAULT_SUPPLEMENTARY_FEED: &str = "./data/listas_brutas/lista_html.json";
pub const DEFAULT_COSMETICS_FEED: &str = "./data/listas_brutas/lista_cosmeticos.json";
pub const DEFAULT_MERGED_PATH: &str = "./data/listas_mescladas/lista_final_mesclada.json";
pub const DEFAULT_OUTPUT_DIR: &str = "./data/listas_mescladas/structured_by_type";

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
/// Every variable is optional; the defaults reproduce the directory layout the
/// scrapers write into.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let path = |var: &str, default: &str| -> Result<PathBuf, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "path must be non-empty".to_string(),
            });
        }
        Ok(PathBuf::from(raw))
    };

    let log_level = or_default("INKCAT_LOG_LEVEL", "info");

    let primary_feed_path = path("INKCAT_PRIMARY_FEED", DEFAULT_PRIMARY_FEED)?;
    let supplementary_feed_path = path("INKCAT_SUPPLEMENTARY_FEED", DEFAULT_SUPPLEMENTARY_FEED)?;
    let cosmetics_feed_path = path("INKCAT_COSMETICS_FEED", DEFAULT_COSMETICS_FEED)?;
    let merged_path = path("INKCAT_MERGED_PATH", DEFAULT_MERGED_PATH)?;
    let output_dir = path("INKCAT_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)?;

    Ok(AppConfig {
        log_level,
        primary_feed_path,
        supplementary_feed_path,
        cosmetics_feed_path,
        merged_path,
        output_dir,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::{AppConfig, CatalogConfig, Environment, SaveBackPolicy};
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
/// Every variable has a default, so only malformed values fail.
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

    let env = parse_environment(&or_default("SHELFSCAN_ENV", "development"))?;
    let log_level = or_default("SHELFSCAN_LOG_LEVEL", "info");
    let inventory_path = PathBuf::from(or_default(
        "SHELFSCAN_INVENTORY_PATH",
        "./config/inventory.yaml",
    ));
    let save_back = parse_save_back(&or_default("SHELFSCAN_SAVE_BACK", "log"))?;

    let defaults = CatalogConfig::default();
    let request_timeout_secs = parse_u64("SHELFSCAN_CATALOG_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHELFSCAN_CATALOG_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let catalog = CatalogConfig {
        request_timeout_secs,
        user_agent: or_default("SHELFSCAN_CATALOG_USER_AGENT", &defaults.user_agent),
        open_food_facts_url: or_default(
            "SHELFSCAN_OPEN_FOOD_FACTS_URL",
            &defaults.open_food_facts_url,
        ),
        open_beauty_facts_url: or_default(
            "SHELFSCAN_OPEN_BEAUTY_FACTS_URL",
            &defaults.open_beauty_facts_url,
        ),
        open_products_facts_url: or_default(
            "SHELFSCAN_OPEN_PRODUCTS_FACTS_URL",
            &defaults.open_products_facts_url,
        ),
        google_books_url: or_default("SHELFSCAN_GOOGLE_BOOKS_URL", &defaults.google_books_url),
        open_library_url: or_default("SHELFSCAN_OPEN_LIBRARY_URL", &defaults.open_library_url),
    };

    Ok(AppConfig {
        env,
        log_level,
        inventory_path,
        save_back,
        catalog,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHELFSCAN_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

fn parse_save_back(s: &str) -> Result<SaveBackPolicy, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "log" => Ok(SaveBackPolicy::LogOnly),
        "persist" => Ok(SaveBackPolicy::Persist),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHELFSCAN_SAVE_BACK".to_string(),
            reason: format!("expected log or persist; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

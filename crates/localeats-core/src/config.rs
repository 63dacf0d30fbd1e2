use crate::app_config::AppConfig;
use crate::coordinate::Coordinate;
use crate::ConfigError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_USER_AGENT: &str = "localeats/0.1 (local-food-finder)";
pub const DEFAULT_IP_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

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
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
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

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    };

    let parse_f64 = |var: &str| -> Result<Option<f64>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()
    };

    let log_level = or_default("LOCALEATS_LOG_LEVEL", "warn");
    let gemini_base_url = or_default("LOCALEATS_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let gemini_model = or_default("LOCALEATS_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let user_agent = or_default("LOCALEATS_USER_AGENT", DEFAULT_USER_AGENT);

    let fixed_location = match (
        parse_f64("LOCALEATS_LATITUDE")?,
        parse_f64("LOCALEATS_LONGITUDE")?,
    ) {
        (Some(lat), Some(lng)) => {
            Some(
                Coordinate::new(lat, lng).map_err(|e| ConfigError::InvalidEnvVar {
                    var: "LOCALEATS_LATITUDE/LOCALEATS_LONGITUDE".to_string(),
                    reason: e.to_string(),
                })?,
            )
        }
        (None, None) => None,
        (Some(_), None) => return Err(ConfigError::MissingEnvVar("LOCALEATS_LONGITUDE".into())),
        (None, Some(_)) => return Err(ConfigError::MissingEnvVar("LOCALEATS_LATITUDE".into())),
    };

    let ip_geolocation_enabled = parse_bool("LOCALEATS_IP_GEOLOCATION", "true")?;
    let ip_geolocation_url = or_default("LOCALEATS_IP_GEOLOCATION_URL", DEFAULT_IP_GEOLOCATION_URL);
    let geolocation_timeout_secs = parse_u64("LOCALEATS_GEOLOCATION_TIMEOUT_SECS", "10")?;
    if geolocation_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LOCALEATS_GEOLOCATION_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        gemini_base_url,
        gemini_model,
        user_agent,
        fixed_location,
        ip_geolocation_enabled,
        ip_geolocation_url,
        geolocation_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

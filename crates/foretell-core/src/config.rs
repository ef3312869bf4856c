use crate::app_config::{AppConfig, Environment};
use crate::sentiment::SentimentThresholds;
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
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
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

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(var, format!("{raw} is not a finite number")))
        }
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("FORETELL_ENV", "development"));
    let log_level = or_default("FORETELL_LOG_LEVEL", "info");

    let positive_above = parse_f64("FORETELL_POSITIVE_THRESHOLD", "0.8")?;
    let negative_below = parse_f64("FORETELL_NEGATIVE_THRESHOLD", "0.2")?;
    for (var, value) in [
        ("FORETELL_POSITIVE_THRESHOLD", positive_above),
        ("FORETELL_NEGATIVE_THRESHOLD", negative_below),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(var, format!("{value} is outside [0, 1]")));
        }
    }
    if negative_below >= positive_above {
        return Err(invalid(
            "FORETELL_NEGATIVE_THRESHOLD",
            format!("{negative_below} must be below the positive threshold {positive_above}"),
        ));
    }

    let min_weight = parse_f64("FORETELL_MIN_WEIGHT", "0.05")?;
    if min_weight <= 0.0 {
        return Err(invalid(
            "FORETELL_MIN_WEIGHT",
            format!("{min_weight} must be greater than 0"),
        ));
    }

    let default_reward_pool = parse_f64("FORETELL_DEFAULT_REWARD_POOL", "100")?;
    if default_reward_pool < 0.0 {
        return Err(invalid(
            "FORETELL_DEFAULT_REWARD_POOL",
            format!("{default_reward_pool} must not be negative"),
        ));
    }

    let classifier_url = lookup("FORETELL_CLASSIFIER_URL")
        .ok()
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty());
    let classifier_timeout_secs = parse_u64("FORETELL_CLASSIFIER_TIMEOUT_SECS", "10")?;
    if classifier_timeout_secs == 0 {
        return Err(invalid(
            "FORETELL_CLASSIFIER_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        thresholds: SentimentThresholds {
            positive_above,
            negative_below,
            ..SentimentThresholds::default()
        },
        min_weight,
        default_reward_pool,
        classifier_url,
        classifier_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Fallback user-agent pool when `PRICELENS_USER_AGENTS` is unset.
/// Current desktop-browser strings; retail sites serve degraded or blocked
/// markup to obviously non-browser agents.
const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value fails to parse or validate.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any value fails to parse or validate.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let retailers_path = PathBuf::from(or_default(
        "PRICELENS_RETAILERS_PATH",
        "./config/retailers.yaml",
    ));
    let log_level = or_default("PRICELENS_LOG_LEVEL", "info");

    let page_timeout_secs = parse_u64("PRICELENS_PAGE_TIMEOUT_SECS", "60")?;
    let max_items = parse_usize("PRICELENS_MAX_ITEMS", "5")?;
    let pacing_delay_min_ms = parse_u64("PRICELENS_PACING_DELAY_MIN_MS", "500")?;
    let pacing_delay_max_ms = parse_u64("PRICELENS_PACING_DELAY_MAX_MS", "2000")?;

    if pacing_delay_min_ms > pacing_delay_max_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRICELENS_PACING_DELAY_MIN_MS".to_string(),
            reason: format!(
                "minimum delay {pacing_delay_min_ms}ms exceeds maximum {pacing_delay_max_ms}ms"
            ),
        });
    }

    if max_items == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRICELENS_MAX_ITEMS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let user_agents: Vec<String> = match lookup("PRICELENS_USER_AGENTS") {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        Err(_) => DEFAULT_USER_AGENTS.iter().map(|&s| s.to_owned()).collect(),
    };
    if user_agents.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRICELENS_USER_AGENTS".to_string(),
            reason: "user-agent pool must contain at least one entry".to_string(),
        });
    }

    Ok(AppConfig {
        retailers_path,
        log_level,
        page_timeout_secs,
        max_items,
        pacing_delay_min_ms,
        pacing_delay_max_ms,
        user_agents,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. Every variable has a
/// default, so absence is never an error.
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
/// Returns `ConfigError` if a value fails to parse.
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

    let profile_url = or_default(
        "INKSTATS_PROFILE_URL",
        "https://www.jianshu.com/u/9b797d42a0cc",
    );
    let collections_heading = or_default("INKSTATS_COLLECTIONS_HEADING", "他创建的专题");
    let show_more_selector = or_default("INKSTATS_SHOW_MORE_SELECTOR", ".list .check-more");
    let output_dir = PathBuf::from(or_default("INKSTATS_OUTPUT_DIR", "./reports"));
    let log_level = or_default("INKSTATS_LOG_LEVEL", "info");

    let scroll_poll_ms = parse_u64("INKSTATS_SCROLL_POLL_MS", "100")?;
    let settle_delay_ms = parse_u64("INKSTATS_SETTLE_DELAY_MS", "1000")?;
    let scroll_max_rounds = parse_usize("INKSTATS_SCROLL_MAX_ROUNDS", "200")?;

    let request_timeout_secs = parse_u64("INKSTATS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("INKSTATS_USER_AGENT", "inkstats/0.1 (article-statistics)");

    Ok(AppConfig {
        profile_url,
        collections_heading,
        show_more_selector,
        output_dir,
        log_level,
        scroll_poll_ms,
        settle_delay_ms,
        scroll_max_rounds,
        request_timeout_secs,
        user_agent,
    })
}

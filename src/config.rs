use std::time::Duration;

pub const SOURCE_URL_VAR: &str = "FEATURES_SOURCE_URL";
pub const FETCH_DELAY_VAR: &str = "FEATURES_FETCH_DELAY_MS";
pub const LOG_VAR: &str = "FEATURES_LOG";

const DEFAULT_FETCH_DELAY_MS: u64 = 1500;
const DEFAULT_LOG: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote envelope URL; the built-in sample is used when unset.
    pub source_url: Option<String>,
    /// Simulated latency of the built-in sample.
    pub fetch_delay: Duration,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: None,
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            log_filter: DEFAULT_LOG.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let source_url = lookup(SOURCE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let fetch_delay = lookup(FETCH_DELAY_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.fetch_delay);

        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            source_url,
            fetch_delay,
            log_filter,
        }
    }
}

// src/config.rs

use std::env;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTI2_JlaCmYeeyQ3XCSRwS-wSgJYnG6F7-CVsLh3ygHMTDjc_yegxnPDic0IRoE7xytylT1TMCGIfgj/pub?gid=1857612585&single=true&output=csv";

#[derive(Debug)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => write!(f, "Invalid value for {var}: {value:?}"),
        }
    }
}

impl Error for ConfigError {}

/// Settings read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed_url: String,
    pub bind: SocketAddr,
    pub cache_ttl: Duration,
    pub workers: usize,
    pub fetch_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache_ttl: Duration::from_secs(3600),
            workers: 8,
            fetch_attempts: 3,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            feed_url: lookup("DASHBOARD_FEED_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.feed_url),
            bind: parse_var(&lookup, "DASHBOARD_BIND")?.unwrap_or(defaults.bind),
            cache_ttl: parse_var(&lookup, "DASHBOARD_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            workers: parse_var(&lookup, "DASHBOARD_WORKERS")?
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.workers),
            fetch_attempts: parse_var(&lookup, "DASHBOARD_FETCH_ATTEMPTS")?
                .filter(|n: &u32| *n > 0)
                .unwrap_or(defaults.fetch_attempts),
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

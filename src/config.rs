//! Configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present; real
//! environment variables take precedence over it.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://bayut.p.rapidapi.com/properties/list";
pub const DEFAULT_API_HOST: &str = "bayut.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_HITS_PER_PAGE: u32 = 25;
pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Listings provider connection settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_host: String,
    pub api_key: String,
    /// Upper bound for one outbound request.
    pub timeout: Duration,
    pub hits_per_page: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    /// Ranking truncation point.
    pub top_n: usize,
    /// JSON file replacing the built-in lookup tables.
    pub lookup_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| source(var).filter(|v| !v.trim().is_empty());

        let api_key = get("RAPIDAPI_KEY").ok_or(ConfigError::Missing("RAPIDAPI_KEY"))?;

        let api_url = get("LISTINGS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if Url::parse(&api_url).is_err() {
            return Err(ConfigError::Invalid {
                var: "LISTINGS_API_URL",
                value: api_url,
            });
        }

        let timeout_secs = parse_or(
            "LISTINGS_TIMEOUT_SECS",
            get("LISTINGS_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let hits_per_page = parse_or(
            "LISTINGS_HITS_PER_PAGE",
            get("LISTINGS_HITS_PER_PAGE"),
            DEFAULT_HITS_PER_PAGE,
        )?;
        let top_n = parse_or("LISTINGS_TOP_N", get("LISTINGS_TOP_N"), DEFAULT_TOP_N)?;

        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "LISTINGS_TIMEOUT_SECS",
                value: "0".into(),
            });
        }
        if top_n == 0 {
            return Err(ConfigError::Invalid {
                var: "LISTINGS_TOP_N",
                value: "0".into(),
            });
        }

        Ok(Self {
            provider: ProviderConfig {
                api_url,
                api_host: get("LISTINGS_API_HOST")
                    .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
                api_key,
                timeout: Duration::from_secs(timeout_secs),
                hits_per_page,
            },
            top_n,
            lookup_file: get("LISTINGS_LOOKUP_FILE").map(PathBuf::from),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { var, value }),
        },
    }
}

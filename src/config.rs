use std::env;
use std::time::Duration;

use crate::errors::ConfigError;

pub const API_KEY_VAR: &str = "API_FOOTBALL_KEY";
pub const BASE_URL_VAR: &str = "API_FOOTBALL_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api-football-v1.p.rapidapi.com/v3";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the API client. Built once at startup and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Value of the `x-rapidapi-host` header.
    pub host: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        let base_url = lookup(BASE_URL_VAR)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let host = host_of(&base_url);

        Ok(Self {
            api_key,
            base_url,
            host,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }
}

fn host_of(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    rest.split(['/', '?']).next().unwrap_or_default().to_string()
}

use std::time::Duration;

use url::Url;

use crate::defaults::{GFG_DEMO_USERNAME, LEETCODE_DEMO_USERNAME};
use crate::error::AppError;
use crate::models::Provider;

pub const DEFAULT_GFG_BASE_URL: &str = "https://www.geeksforgeeks.org/user/";
pub const DEFAULT_LEETCODE_BASE_URL: &str = "https://leetcode.com/u/";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the provider profile pages are fetched.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub gfg_base_url: String,
    pub leetcode_base_url: String,
    pub gfg_default_username: String,
    pub leetcode_default_username: String,
    /// Upper bound on one provider's fetch-and-extract call.
    pub fetch_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            gfg_base_url: DEFAULT_GFG_BASE_URL.to_string(),
            leetcode_base_url: DEFAULT_LEETCODE_BASE_URL.to_string(),
            gfg_default_username: GFG_DEMO_USERNAME.to_string(),
            leetcode_default_username: LEETCODE_DEMO_USERNAME.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    /// Read configuration from environment variables.
    ///
    /// - `CODETREK_GFG_BASE_URL` (optional)
    /// - `CODETREK_LEETCODE_BASE_URL` (optional)
    /// - `CODETREK_GFG_DEFAULT_USERNAME` (optional)
    /// - `CODETREK_LEETCODE_DEFAULT_USERNAME` (optional)
    /// - `CODETREK_FETCH_TIMEOUT_SECS` (optional, defaults to 10)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("CODETREK_GFG_BASE_URL") {
            config.gfg_base_url = parse_base_url("CODETREK_GFG_BASE_URL", &raw)?.into();
        }
        if let Some(raw) = lookup("CODETREK_LEETCODE_BASE_URL") {
            config.leetcode_base_url = parse_base_url("CODETREK_LEETCODE_BASE_URL", &raw)?.into();
        }
        if let Some(name) = lookup("CODETREK_GFG_DEFAULT_USERNAME").filter(|s| !s.trim().is_empty())
        {
            config.gfg_default_username = name.trim().to_string();
        }
        if let Some(name) =
            lookup("CODETREK_LEETCODE_DEFAULT_USERNAME").filter(|s| !s.trim().is_empty())
        {
            config.leetcode_default_username = name.trim().to_string();
        }
        if let Some(raw) = lookup("CODETREK_FETCH_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid CODETREK_FETCH_TIMEOUT_SECS '{raw}': must be a positive integer"
                ))
            })?;
            if secs == 0 {
                return Err(AppError::ConfigError(
                    "CODETREK_FETCH_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
            config.fetch_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::GeeksforGeeks => &self.gfg_base_url,
            Provider::LeetCode => &self.leetcode_base_url,
        }
    }

    pub fn default_username(&self, provider: Provider) -> &str {
        match provider {
            Provider::GeeksforGeeks => &self.gfg_default_username,
            Provider::LeetCode => &self.leetcode_default_username,
        }
    }

    /// Trimmed username, or the provider's demo username when missing or blank.
    pub fn resolve_username(&self, provider: Provider, username: Option<&str>) -> String {
        username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.default_username(provider))
            .to_string()
    }

    /// Profile page URL: the base URL with the username appended as a single,
    /// percent-encoded path segment and a trailing slash.
    pub fn profile_url(&self, provider: Provider, username: &str) -> Result<String, AppError> {
        let mut url = parse_base_url(provider.display_name(), self.base_url(provider))?;
        url.path_segments_mut()
            .map_err(|_| {
                AppError::ConfigError(format!("{provider} base URL cannot take a path"))
            })?
            .pop_if_empty()
            .push(username)
            .push("");
        Ok(url.into())
    }
}

fn parse_base_url(key: &str, raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::ConfigError(format!("Invalid {key} '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        _ => Err(AppError::ConfigError(format!(
            "Invalid {key} '{raw}': must be an http(s) base URL"
        ))),
    }
}

//! Source configuration
//!
//! Defaults point at Cloudflare's public endpoints. Each field can be
//! overridden from the environment via [`SourceConfig::from_env`].

use crate::error::{CloudflareError, Result};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_IPV4_LIST_URL: &str = "https://www.cloudflare.com/ips-v4";
pub const DEFAULT_IPV6_LIST_URL: &str = "https://www.cloudflare.com/ips-v6";

pub const ENV_API_BASE: &str = "CLOUDFLARE_API_BASE";
pub const ENV_IPV4_LIST_URL: &str = "CLOUDFLARE_IPS_V4_URL";
pub const ENV_IPV6_LIST_URL: &str = "CLOUDFLARE_IPS_V6_URL";
pub const ENV_TIMEOUT_SECS: &str = "CLOUDFLARE_IPS_TIMEOUT_SECS";

const USER_AGENT: &str = concat!("cloudflare-ip-ranges/", env!("CARGO_PKG_VERSION"));

/// Endpoints and HTTP settings shared by the built-in sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub api_base: String,
    pub ipv4_list_url: String,
    pub ipv6_list_url: String,
    /// Per-request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            ipv4_list_url: DEFAULT_IPV4_LIST_URL.to_string(),
            ipv6_list_url: DEFAULT_IPV6_LIST_URL.to_string(),
            timeout: None,
        }
    }
}

impl SourceConfig {
    /// Defaults with any set environment variables applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(api_base) = std::env::var(ENV_API_BASE) {
            config = config.with_api_base(api_base);
        }
        if let Ok(url) = std::env::var(ENV_IPV4_LIST_URL) {
            config.ipv4_list_url = url;
        }
        if let Ok(url) = std::env::var(ENV_IPV6_LIST_URL) {
            config.ipv6_list_url = url;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            config.timeout = Some(parse_timeout(&raw)?);
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build an HTTP client honoring the configured timeout
    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        CloudflareError::InvalidConfig(format!(
            "{} must be a whole number of seconds, got '{}'",
            ENV_TIMEOUT_SECS, raw
        ))
    })?;
    if secs == 0 {
        return Err(CloudflareError::InvalidConfig(format!(
            "{} must be greater than zero",
            ENV_TIMEOUT_SECS
        )));
    }
    Ok(Duration::from_secs(secs))
}

//! Error types for IP range retrieval

use thiserror::Error;

/// Errors raised by an upstream IP range source.
#[derive(Error, Debug)]
pub enum CloudflareError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        url: String,
        /// First error message from a Cloudflare JSON error body, if any
        detail: Option<String>,
    },

    #[error("Cloudflare API error: {0}")]
    ApiError(String),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CloudflareError>;

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

/// The single error surfaced by [`RangeFetcher`](crate::RangeFetcher).
///
/// Wraps whatever made the upstream retrieval fail.
#[derive(Error, Debug)]
#[error("failed to fetch Cloudflare IP ranges: {source}")]
pub struct FetchError {
    #[source]
    source: CloudflareError,
}

impl FetchError {
    /// The underlying upstream failure.
    pub fn cause(&self) -> &CloudflareError {
        &self.source
    }

    pub fn into_cause(self) -> CloudflareError {
        self.source
    }
}

impl From<CloudflareError> for FetchError {
    fn from(source: CloudflareError) -> Self {
        Self { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_names_step() {
        let err = FetchError::from(CloudflareError::Status {
            status: 503,
            url: "https://api.cloudflare.com/client/v4/ips".to_string(),
            detail: None,
        });

        assert_eq!(
            err.to_string(),
            "failed to fetch Cloudflare IP ranges: unexpected HTTP status 503 from https://api.cloudflare.com/client/v4/ips"
        );
    }

    #[test]
    fn test_status_error_with_detail() {
        let err = CloudflareError::Status {
            status: 400,
            url: "https://api.cloudflare.com/client/v4/ips".to_string(),
            detail: Some("Invalid request headers".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 400 from https://api.cloudflare.com/client/v4/ips: Invalid request headers"
        );
    }

    #[test]
    fn test_fetch_error_keeps_source() {
        let err = FetchError::from(CloudflareError::ApiError("rate limited".to_string()));

        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "Cloudflare API error: rate limited");
        assert!(matches!(err.into_cause(), CloudflareError::ApiError(_)));
    }
}

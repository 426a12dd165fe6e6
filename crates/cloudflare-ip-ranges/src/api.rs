//! Cloudflare `/ips` API client
//!
//! Queries the v4 API with `china_colo=1` so the response also carries the
//! ranges served from the China network. Those come back as one mixed list
//! and are split by address family here.

use crate::config::SourceConfig;
use crate::error::{CloudflareError, Result};
use crate::http::get_text;
use crate::ranges::CidrSet;
use crate::source::IpRangeSource;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

/// Source backed by `GET {api_base}/ips?china_colo=1`
pub struct CloudflareApi {
    client: reqwest::Client,
    url: String,
}

impl CloudflareApi {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            url: format!("{}/ips?china_colo=1", config.api_base),
        })
    }

    /// Full request URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IpRangeSource for CloudflareApi {
    fn name(&self) -> &str {
        "cloudflare-api"
    }

    async fn fetch_ranges(&self) -> Result<CidrSet> {
        let body = get_text(&self.client, &self.url).await?;
        parse_response(&body)
    }
}

/// Decode an `/ips` response body into a [`CidrSet`]
pub fn parse_response(body: &str) -> Result<CidrSet> {
    let api_response: ApiResponse<IpRangesResult> = serde_json::from_str(body)?;

    if !api_response.success {
        let error_msg = api_response
            .errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string());
        tracing::warn!("Cloudflare API reported failure: {}", error_msg);
        return Err(CloudflareError::ApiError(error_msg));
    }

    let result = api_response
        .result
        .ok_or_else(|| CloudflareError::ApiError("response has no result".to_string()))?;

    let (china_ipv6, china_ipv4): (Vec<String>, Vec<String>) = result
        .china_colos
        .into_iter()
        .partition(|cidr| cidr.contains(':'));

    Ok(CidrSet::new(result.ipv4_cidrs, result.ipv6_cidrs).with_china(china_ipv4, china_ipv6))
}

/// First `errors[].message` of a Cloudflare JSON error body
///
/// Used for non-2xx responses; `None` when the body is not such a document.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let error_body: ErrorBody = serde_json::from_str(body).ok()?;
    error_body.errors.into_iter().next().map(|e| e.message)
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    result: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[allow(dead_code)]
    #[serde(default)]
    code: i32,
    message: String,
}

#[derive(Debug, Deserialize)]
struct IpRangesResult {
    #[serde(default, deserialize_with = "null_as_default")]
    ipv4_cidrs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    ipv6_cidrs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    china_colos: Vec<String>,
}

/// `null` reads as an empty value, the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

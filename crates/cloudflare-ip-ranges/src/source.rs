//! Upstream IP range source abstraction

use crate::api::CloudflareApi;
use crate::config::SourceConfig;
use crate::error::Result;
use crate::lists::PublishedLists;
use crate::ranges::CidrSet;
use async_trait::async_trait;

/// Where the raw CIDR blocks come from
///
/// Implemented by the HTTP clients in this crate and by fixtures in tests.
/// One call to [`fetch_ranges`](IpRangeSource::fetch_ranges) is one logical
/// retrieval; everything it returns belongs to the same snapshot.
#[async_trait]
pub trait IpRangeSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Retrieve all four CIDR lists
    async fn fetch_ranges(&self) -> Result<CidrSet>;
}

#[async_trait]
impl<T: IpRangeSource + ?Sized> IpRangeSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_ranges(&self) -> Result<CidrSet> {
        (**self).fetch_ranges().await
    }
}

/// Selects one of the built-in sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Cloudflare v4 `/ips` endpoint, includes China ranges
    #[default]
    Api,
    /// The plain-text `ips-v4` / `ips-v6` documents
    Lists,
}

impl SourceKind {
    pub fn build(self, config: &SourceConfig) -> Result<Box<dyn IpRangeSource>> {
        Ok(match self {
            SourceKind::Api => Box::new(CloudflareApi::new(config)?),
            SourceKind::Lists => Box::new(PublishedLists::new(config)?),
        })
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Api => write!(f, "api"),
            SourceKind::Lists => write!(f, "lists"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = crate::error::CloudflareError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "api" => Ok(SourceKind::Api),
            "lists" => Ok(SourceKind::Lists),
            other => Err(crate::error::CloudflareError::InvalidConfig(format!(
                "unknown source '{}', expected 'api' or 'lists'",
                other
            ))),
        }
    }
}

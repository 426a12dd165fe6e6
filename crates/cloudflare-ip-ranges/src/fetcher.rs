//! Fetch and normalize Cloudflare IP ranges

use crate::config::SourceConfig;
use crate::error::{self, FetchError};
use crate::ranges::CombinedRanges;
use crate::source::{IpRangeSource, SourceKind};

/// Retrieves raw ranges from a source and returns their normalized form
///
/// Holds no state between calls: every [`fetch`](RangeFetcher::fetch) asks the
/// source once and builds a fresh [`CombinedRanges`]. There is no cache and
/// no retry.
pub struct RangeFetcher<S> {
    source: S,
}

impl<S: IpRangeSource> RangeFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch(&self) -> Result<CombinedRanges, FetchError> {
        tracing::debug!("Fetching IP ranges from {}", self.source.name());

        let set = self.source.fetch_ranges().await?;
        if set.is_empty() {
            tracing::warn!("{} returned no IP ranges", self.source.name());
        } else {
            tracing::debug!("{} returned {} blocks", self.source.name(), set.len());
        }
        let ranges = CombinedRanges::from_cidr_set(set);

        tracing::info!(
            "Fetched {} IPv4, {} IPv6, {} China IPv4, {} China IPv6 ranges (id {})",
            ranges.ipv4.len(),
            ranges.ipv6.len(),
            ranges.china_ipv4.len(),
            ranges.china_ipv6.len(),
            ranges.identity
        );

        Ok(ranges)
    }
}

impl RangeFetcher<Box<dyn IpRangeSource>> {
    /// Fetcher over one of the built-in HTTP sources
    ///
    /// Fails only on setup (HTTP client construction); nothing is fetched yet.
    pub fn from_config(kind: SourceKind, config: &SourceConfig) -> error::Result<Self> {
        Ok(Self::new(kind.build(config)?))
    }
}

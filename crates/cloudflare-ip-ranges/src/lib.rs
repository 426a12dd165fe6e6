//! Cloudflare IP ranges
//!
//! Fetches the IPv4/IPv6 CIDR blocks Cloudflare publishes (including the
//! China network subsets), sorts them and derives a stable identity that
//! changes only when the global ranges change.
//!
//! # Sources
//!
//! - [`CloudflareApi`]: the v4 `/ips` endpoint, with China ranges
//! - [`PublishedLists`]: the plain-text `ips-v4` / `ips-v6` documents
//!
//! Anything implementing [`IpRangeSource`] can be plugged in instead.
//!
//! # Ordering
//!
//! All lists are sorted as plain strings, so `"10.0.0.0/8"` comes before
//! `"2.0.0.0/8"`. This is not numeric IP order and is kept as-is for
//! compatibility with existing consumers of the identity and list order.
//!
//! # Example
//!
//! ```ignore
//! use cloudflare_ip_ranges::{RangeFetcher, SourceConfig, SourceKind};
//!
//! let config = SourceConfig::from_env()?;
//! let fetcher = RangeFetcher::from_config(SourceKind::Api, &config)?;
//!
//! let ranges = fetcher.fetch().await?;
//! println!("{} -> {:?}", ranges.identity, ranges.all);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
mod http;
pub mod lists;
pub mod ranges;
pub mod source;

pub use api::CloudflareApi;
pub use config::SourceConfig;
pub use error::{CloudflareError, FetchError, Result};
pub use fetcher::RangeFetcher;
pub use lists::PublishedLists;
pub use ranges::{CidrSet, CombinedRanges, identity};
pub use source::{IpRangeSource, SourceKind};

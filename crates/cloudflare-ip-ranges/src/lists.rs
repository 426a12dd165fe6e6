//! Plain-text `ips-v4` / `ips-v6` documents
//!
//! These carry one CIDR block per line and no China subsets.

use crate::config::SourceConfig;
use crate::error::Result;
use crate::http::get_text;
use crate::ranges::CidrSet;
use crate::source::IpRangeSource;
use async_trait::async_trait;

/// Source backed by the two published text lists
pub struct PublishedLists {
    client: reqwest::Client,
    ipv4_url: String,
    ipv6_url: String,
}

impl PublishedLists {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            ipv4_url: config.ipv4_list_url.clone(),
            ipv6_url: config.ipv6_list_url.clone(),
        })
    }
}

#[async_trait]
impl IpRangeSource for PublishedLists {
    fn name(&self) -> &str {
        "published-lists"
    }

    async fn fetch_ranges(&self) -> Result<CidrSet> {
        let ipv4 = parse_list(&get_text(&self.client, &self.ipv4_url).await?);
        let ipv6 = parse_list(&get_text(&self.client, &self.ipv6_url).await?);
        Ok(CidrSet::new(ipv4, ipv6))
    }
}

/// One block per non-empty line; `#` lines are comments
pub fn parse_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let body = "173.245.48.0/20\n103.21.244.0/22\r\n\n  103.22.200.0/22  \n";
        assert_eq!(
            parse_list(body),
            vec!["173.245.48.0/20", "103.21.244.0/22", "103.22.200.0/22"]
        );
    }

    #[test]
    fn test_parse_list_skips_comments() {
        let body = "# Cloudflare IPv6\n2400:cb00::/32\n#2606:4700::/32\n";
        assert_eq!(parse_list(body), vec!["2400:cb00::/32"]);
    }

    #[test]
    fn test_parse_list_empty_body() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_fails() {
        let config = SourceConfig {
            ipv4_list_url: "http://127.0.0.1:9/ips-v4".to_string(),
            ipv6_list_url: "http://127.0.0.1:9/ips-v6".to_string(),
            ..SourceConfig::default()
        }
        .with_timeout(std::time::Duration::from_secs(2));
        let lists = PublishedLists::new(&config).unwrap();

        assert!(matches!(
            lists.fetch_ranges().await,
            Err(crate::error::CloudflareError::Http(_))
        ));
    }
}

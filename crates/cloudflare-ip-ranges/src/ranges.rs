//! CIDR range sets and their normalized form

use serde::{Deserialize, Serialize};

/// Delimiter placed between CIDR blocks when computing the identity
const IDENTITY_DELIMITER: &str = "|";

/// Raw CIDR blocks as returned by an upstream source
///
/// Order is whatever upstream produced; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidrSet {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
    pub china_ipv4: Vec<String>,
    pub china_ipv6: Vec<String>,
}

impl CidrSet {
    pub fn new(ipv4: Vec<String>, ipv6: Vec<String>) -> Self {
        Self {
            ipv4,
            ipv6,
            ..Default::default()
        }
    }

    pub fn with_china(mut self, china_ipv4: Vec<String>, china_ipv6: Vec<String>) -> Self {
        self.china_ipv4 = china_ipv4;
        self.china_ipv6 = china_ipv6;
        self
    }

    /// Total number of blocks across all four lists
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len() + self.china_ipv4.len() + self.china_ipv6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorted IP ranges plus a content-derived identity
///
/// Serializes with the field names exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedRanges {
    #[serde(rename = "id")]
    pub identity: String,

    /// Union of `ipv4` and `ipv6`; China subsets are never included
    #[serde(rename = "cidr_blocks")]
    pub all: Vec<String>,

    #[serde(rename = "ipv4_cidr_blocks")]
    pub ipv4: Vec<String>,

    #[serde(rename = "ipv6_cidr_blocks")]
    pub ipv6: Vec<String>,

    #[serde(rename = "china_ipv4_cidr_blocks")]
    pub china_ipv4: Vec<String>,

    #[serde(rename = "china_ipv6_cidr_blocks")]
    pub china_ipv6: Vec<String>,
}

impl CombinedRanges {
    /// Normalize a raw set.
    ///
    /// Every list is sorted by plain string order, not numeric IP order, so
    /// `"10.0.0.0/8"` lands before `"2.0.0.0/8"`. Existing consumers depend on
    /// this exact ordering.
    pub fn from_cidr_set(set: CidrSet) -> Self {
        let CidrSet {
            mut ipv4,
            mut ipv6,
            mut china_ipv4,
            mut china_ipv6,
        } = set;

        ipv4.sort();
        ipv6.sort();
        china_ipv4.sort();
        china_ipv6.sort();

        let mut all: Vec<String> = ipv4.iter().chain(ipv6.iter()).cloned().collect();
        all.sort();

        Self {
            identity: identity(&all),
            all,
            ipv4,
            ipv6,
            china_ipv4,
            china_ipv6,
        }
    }

    /// Look up an output list by its caller-facing name
    pub fn field(&self, name: &str) -> Option<&[String]> {
        match name {
            "cidr_blocks" => Some(&self.all),
            "ipv4_cidr_blocks" => Some(&self.ipv4),
            "ipv6_cidr_blocks" => Some(&self.ipv6),
            "china_ipv4_cidr_blocks" => Some(&self.china_ipv4),
            "china_ipv6_cidr_blocks" => Some(&self.china_ipv6),
            _ => None,
        }
    }
}

impl From<CidrSet> for CombinedRanges {
    fn from(set: CidrSet) -> Self {
        Self::from_cidr_set(set)
    }
}

/// CRC-32 (IEEE) of the `|`-joined blocks, as an unsigned decimal string.
///
/// Callers pass the already sorted union list.
pub fn identity<S: AsRef<str>>(blocks: &[S]) -> String {
    let joined = blocks
        .iter()
        .map(|b| b.as_ref())
        .collect::<Vec<&str>>()
        .join(IDENTITY_DELIMITER);
    crc32fast::hash(joined.as_bytes()).to_string()
}

use clap::ValueEnum;
use cloudflare_ip_ranges::CombinedRanges;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// All fields as a JSON object
    Json,
    /// One value per line of the selected field
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Field {
    CidrBlocks,
    Ipv4CidrBlocks,
    Ipv6CidrBlocks,
    ChinaIpv4CidrBlocks,
    ChinaIpv6CidrBlocks,
    Id,
}

impl Field {
    fn values(self, ranges: &CombinedRanges) -> Vec<&str> {
        let list = match self {
            Field::Id => return vec![ranges.identity.as_str()],
            Field::CidrBlocks => &ranges.all,
            Field::Ipv4CidrBlocks => &ranges.ipv4,
            Field::Ipv6CidrBlocks => &ranges.ipv6,
            Field::ChinaIpv4CidrBlocks => &ranges.china_ipv4,
            Field::ChinaIpv6CidrBlocks => &ranges.china_ipv6,
        };
        list.iter().map(String::as_str).collect()
    }
}

pub fn render(ranges: &CombinedRanges, format: Format, field: Field) -> serde_json::Result<String> {
    match format {
        Format::Json => Ok(format!("{}\n", serde_json::to_string_pretty(ranges)?)),
        Format::Text => Ok(field
            .values(ranges)
            .into_iter()
            .map(|v| format!("{}\n", v))
            .collect()),
    }
}

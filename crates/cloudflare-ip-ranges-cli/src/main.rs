mod output;

use clap::Parser;
use cloudflare_ip_ranges::{RangeFetcher, SourceConfig, SourceKind};
use colored::Colorize;
use output::{Field, Format};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cf-ip-ranges")]
#[command(version, about = "Print Cloudflare's published IP ranges", long_about = None)]
struct Cli {
    /// Where to read the ranges from: "api" (includes China ranges) or "lists"
    #[arg(long, env = "CF_IP_RANGES_SOURCE", default_value_t = SourceKind::Api)]
    source: SourceKind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Field printed by the text format
    #[arg(long, value_enum, default_value_t = Field::CidrBlocks)]
    field: Field,

    /// Request timeout in seconds (overrides CLOUDFLARE_IPS_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the result, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SourceConfig::from_env()?;
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let fetcher = RangeFetcher::from_config(cli.source, &config)?;
    let ranges = fetcher.fetch().await?;

    print!("{}", output::render(&ranges, cli.format, cli.field)?);
    Ok(())
}

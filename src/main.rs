//! Sitemap-Sorter main entry point
//!
//! This is the command-line interface for the sitemap categorizer.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sitemap_sorter::config::{load_optional_config, Config};
use sitemap_sorter::output::ExportReport;
use sitemap_sorter::sitemap::process_sitemap;
use tracing_subscriber::EnvFilter;

/// Sitemap-Sorter: parse a sitemap, categorize URLs, and export a report
///
/// Fetches the given sitemap (following sitemap indexes into their
/// sub-sitemaps), sorts every URL into page, product, collection or blog by
/// its path, and writes the result to an XLSX (or CSV) file.
#[derive(Parser, Debug)]
#[command(name = "sitemap-sorter")]
#[command(version)]
#[command(about = "Parse a sitemap, categorize URLs, and export to Excel", long_about = None)]
struct Cli {
    /// URL of the sitemap to parse
    #[arg(value_name = "SITEMAP_URL")]
    sitemap_url: String,

    /// Output file name (.xlsx, or .csv for CSV output)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Per-request fetch timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..=600))]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(report) => {
            println!(
                "\nSuccessfully processed sitemap. Results saved to: {}",
                report.path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error processing sitemap: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_sorter=info,warn"),
            1 => EnvFilter::new("sitemap_sorter=debug,info"),
            2 => EnvFilter::new("sitemap_sorter=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads configuration, applies CLI overrides and runs the pipeline
async fn run(cli: &Cli) -> anyhow::Result<ExportReport> {
    let config = load_config(cli)?;

    let report = process_sitemap(&config, &cli.sitemap_url, cli.output.as_deref())
        .await
        .with_context(|| format!("failed to process {}", cli.sitemap_url))?;

    Ok(report)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }

    let mut config = load_optional_config(cli.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(timeout) = cli.timeout {
        config.fetcher.timeout_secs = timeout;
    }
    tracing::debug!(
        "Fetch timeout: {}s, user agent: {}",
        config.fetcher.timeout_secs,
        config.fetcher.user_agent
    );

    Ok(config)
}

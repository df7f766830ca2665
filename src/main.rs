// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments / environment into a Config
// 2. Crawl the site breadth-first
// 3. Probe every discovered page for Last-Modified and build the sitemap
// 4. Write sitemap.xml and print a summary (or a JSON report)
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod fetch;
mod sitemap;
mod urls;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use crawl::{CrawlReport, Crawler};
use fetch::HttpFetcher;
use serde::Serialize;
use sitemap::{Sitemap, SitemapEntry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr, filtered by RUST_LOG (default: info).
// Progress lines are plain println! on stdout and are not affected.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;
    let dry_run = cli.dry_run;

    let config = Config::from_cli(cli).context("Invalid configuration")?;
    let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout)?;

    if !json {
        println!("🔍 Crawling: {}", config.start_url);
        println!("🌐 Canonical base: {}", config.canonical_base.origin());
        if !config.exclude.prefixes().is_empty() {
            println!("🚫 Excluded prefixes: {}", config.exclude.prefixes().join(", "));
        }
    }

    let report = Crawler::new(&fetcher, &config).run().await;
    println!("Total URLs: {}", report.discovered.len());

    let sitemap = Sitemap::generate(&report.discovered, &fetcher, &config).await;

    if dry_run {
        println!("Dry run, not writing {}", config.output_path.display());
    } else {
        sitemap
            .write_to(&config.output_path)
            .await
            .context("Could not save the sitemap")?;
        println!("sitemap.xml written -> {}", config.output_path.display());
    }

    if json {
        print_json_report(&config, &report, &sitemap, dry_run)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start_url: &'a str,
    canonical_base: &'a str,
    // None on --dry-run
    output_path: Option<String>,
    crawl: &'a CrawlReport,
    entries: &'a [SitemapEntry],
}

fn print_json_report(
    config: &Config,
    report: &CrawlReport,
    sitemap: &Sitemap,
    dry_run: bool,
) -> Result<()> {
    let json = JsonReport {
        start_url: config.start_url.as_str(),
        canonical_base: config.canonical_base.origin(),
        output_path: (!dry_run).then(|| config.output_path.display().to_string()),
        crawl: report,
        entries: sitemap.entries(),
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

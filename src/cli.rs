// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option can be given as a flag or through an environment variable
// (START_URL, CANONICAL_BASE, ...), which is how the crawler is usually
// configured in cron jobs and containers. Flags win over the environment.
// =============================================================================

use crate::config::{
    DEFAULT_CANONICAL_BASE, DEFAULT_CRAWL_DELAY_SECS, DEFAULT_EXCLUDE_PREFIXES,
    DEFAULT_MAX_PAGES, DEFAULT_OUTPUT_PATH, DEFAULT_PRIORITY, DEFAULT_START_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::sitemap::ChangeFreq;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-crawler",
    version,
    about = "Crawl a website and generate a sitemap.xml for it",
    long_about = "sitemap-crawler walks a site breadth-first from a start URL, stays on the same host, \
                  skips excluded path prefixes and writes every HTML page it finds to a sitemap \
                  under your public canonical domain."
)]
pub struct Cli {
    /// URL the crawl starts from
    #[arg(long, env = "START_URL", default_value = DEFAULT_START_URL)]
    pub start_url: String,

    /// Scheme and host used for the <loc> of every sitemap entry
    #[arg(long, env = "CANONICAL_BASE", default_value = DEFAULT_CANONICAL_BASE)]
    pub canonical_base: String,

    /// Where to write the sitemap
    #[arg(short, long = "output", env = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Stop once this many pages have been discovered
    #[arg(long, env = "MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQ_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pause between page fetches in seconds (fractions allowed)
    #[arg(long, env = "CRAWL_DELAY_SEC", default_value_t = DEFAULT_CRAWL_DELAY_SECS)]
    pub crawl_delay: f64,

    /// Comma-separated path prefixes that are never crawled nor listed
    #[arg(long, env = "EXCLUDE_PREFIXES", default_value = DEFAULT_EXCLUDE_PREFIXES)]
    pub exclude: String,

    /// User-Agent header sent with every request
    #[arg(long, env = "CRAWLER_UA", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// <changefreq> of every sitemap entry
    #[arg(long, env = "CHANGEFREQ", value_enum, default_value_t = ChangeFreq::Weekly)]
    pub changefreq: ChangeFreq,

    /// <priority> of every sitemap entry, between 0.0 and 1.0
    #[arg(long, env = "PRIORITY", default_value = DEFAULT_PRIORITY, value_parser = parse_priority)]
    pub priority: String,

    /// How many Last-Modified probes may run at once while writing the sitemap
    #[arg(
        long,
        env = "PROBE_CONCURRENCY",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub probe_concurrency: u16,

    /// Print a JSON report of the crawl instead of the plain summary
    #[arg(long)]
    pub json: bool,

    /// Crawl and print, but don't write the sitemap file
    #[arg(long)]
    pub dry_run: bool,
}

// Accepts "0.5", "1", "0.80" ... and keeps the text exactly as written,
// because that literal is what ends up in <priority>.
fn parse_priority(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} is outside 0.0..=1.0", raw));
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parser() {
        assert_eq!(parse_priority("0.5"), Ok("0.5".to_string()));
        assert_eq!(parse_priority(" 1.0 "), Ok("1.0".to_string()));
        assert!(parse_priority("1.5").is_err());
        assert!(parse_priority("-0.1").is_err());
        assert!(parse_priority("high").is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sitemap-crawler",
            "--start-url",
            "http://staging.local:8080/",
            "--max-pages",
            "25",
            "--crawl-delay",
            "0",
            "--changefreq",
            "daily",
            "--priority",
            "0.8",
            "-o",
            "out/sitemap.xml",
        ])
        .unwrap();

        assert_eq!(cli.start_url, "http://staging.local:8080/");
        assert_eq!(cli.max_pages, 25);
        assert_eq!(cli.crawl_delay, 0.0);
        assert_eq!(cli.changefreq, ChangeFreq::Daily);
        assert_eq!(cli.priority, "0.8");
        assert_eq!(cli.output_path, PathBuf::from("out/sitemap.xml"));
    }

    #[test]
    fn test_rejects_unknown_changefreq() {
        assert!(Cli::try_parse_from(["sitemap-crawler", "--changefreq", "sometimes"]).is_err());
    }

    #[test]
    fn test_rejects_zero_probe_concurrency() {
        assert!(Cli::try_parse_from(["sitemap-crawler", "--probe-concurrency", "0"]).is_err());
    }
}

// src/config.rs
// =============================================================================
// Run configuration.
//
// Built once at startup from the parsed CLI, validated, and then handed by
// reference to the crawler and the sitemap generator. Nothing reads the
// environment after this point.
// =============================================================================

use crate::cli::Cli;
use crate::error::{Result, SitemapError};
use crate::sitemap::ChangeFreq;
use crate::urls::{normalize, CanonicalBase, PathFilter};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_START_URL: &str = "http://localhost";
pub const DEFAULT_CANONICAL_BASE: &str = "https://www.example.com";
pub const DEFAULT_OUTPUT_PATH: &str = "./sitemap.xml";
pub const DEFAULT_MAX_PAGES: usize = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CRAWL_DELAY_SECS: f64 = 0.2;
pub const DEFAULT_EXCLUDE_PREFIXES: &str = "/admin,/login,/panel";
pub const DEFAULT_USER_AGENT: &str = "SimpleCrawler/1.0";
pub const DEFAULT_PRIORITY: &str = "0.5";

#[derive(Debug, Clone)]
pub struct Config {
    /// Crawl seed; its host[:port] is the only host that gets crawled
    pub start_url: Url,
    pub canonical_base: CanonicalBase,
    pub output_path: PathBuf,
    /// Cap on the number of discovered pages
    pub max_pages: usize,
    pub request_timeout: Duration,
    /// Politeness pause after every fetched page
    pub crawl_delay: Duration,
    pub exclude: PathFilter,
    pub user_agent: String,
    pub changefreq: ChangeFreq,
    pub priority: String,
    pub probe_concurrency: usize,
}

impl Config {
    /// Defaults for everything except the two URLs.
    pub fn new(start_url: Url, canonical_base: CanonicalBase) -> Self {
        Self {
            start_url,
            canonical_base,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_pages: DEFAULT_MAX_PAGES,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            crawl_delay: Duration::from_secs_f64(DEFAULT_CRAWL_DELAY_SECS),
            exclude: PathFilter::from_csv(DEFAULT_EXCLUDE_PREFIXES),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            changefreq: ChangeFreq::Weekly,
            priority: DEFAULT_PRIORITY.to_string(),
            probe_concurrency: 1,
        }
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let start_url = parse_start_url(&cli.start_url)?;
        let canonical_base = CanonicalBase::parse(&cli.canonical_base)?;

        if !cli.crawl_delay.is_finite() || cli.crawl_delay < 0.0 {
            return Err(SitemapError::InvalidOption {
                name: "crawl delay",
                reason: format!("{} is not a non-negative number of seconds", cli.crawl_delay),
            });
        }
        if cli.timeout == 0 {
            return Err(SitemapError::InvalidOption {
                name: "request timeout",
                reason: "must be at least 1 second".to_string(),
            });
        }

        let mut config = Self::new(start_url, canonical_base);
        config.output_path = cli.output_path;
        config.max_pages = cli.max_pages;
        config.request_timeout = Duration::from_secs(cli.timeout);
        config.crawl_delay = Duration::from_secs_f64(cli.crawl_delay);
        config.exclude = PathFilter::from_csv(&cli.exclude);
        config.user_agent = cli.user_agent;
        config.changefreq = cli.changefreq;
        config.priority = cli.priority;
        config.probe_concurrency = usize::from(cli.probe_concurrency);

        Ok(config)
    }
}

// The seed must be something the crawler could actually fetch
fn parse_start_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| SitemapError::InvalidUrl {
        what: "start",
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if normalize(url.as_str()).is_none() {
        return Err(SitemapError::InvalidUrl {
            what: "start",
            url: raw.to_string(),
            reason: "only http and https URLs with a host can be crawled".to_string(),
        });
    }

    Ok(url)
}

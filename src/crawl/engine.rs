// src/crawl/engine.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Take the next admitted URL from the frontier (marks it visited)
// 2. Fetch it - one request in flight at a time
// 3. 200 + text/html: list its canonical URL (unless excluded) and queue
//    every same-host, non-excluded link it contains
// 4. Anything else (404, PDF, timeout, redirect to another host): print it
//    and move on
// 5. Sleep for the crawl delay, repeat
//
// The loop stops when the frontier runs dry or max_pages pages have been
// discovered, whichever comes first. Because fetches are sequential the cap
// is exact, never overshot.
// =============================================================================

use super::frontier::Frontier;
use crate::config::Config;
use crate::fetch::{extract_links, FetchOutcome, Fetcher};
use crate::urls::CanonicalUrl;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// What a finished crawl produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    /// Discovered pages, sorted lexicographically
    pub discovered: Vec<CanonicalUrl>,
    /// URLs a fetch was attempted for
    pub visited: usize,
    /// Responses that were not 200 or not HTML
    pub skipped: usize,
    pub transport_errors: usize,
    /// Candidates still queued when the crawl stopped
    pub pending: usize,
}

pub struct Crawler<'a, F> {
    fetcher: &'a F,
    config: &'a Config,
}

impl<'a, F: Fetcher> Crawler<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a Config) -> Self {
        Self { fetcher, config }
    }

    pub async fn run(&self) -> CrawlReport {
        let config = self.config;
        info!(
            "Starting crawl of {} (max {} pages)",
            config.start_url, config.max_pages
        );

        let mut frontier = Frontier::new(&config.start_url, config.exclude.clone());
        // BTreeSet keeps the output sorted no matter the traversal order
        let mut discovered: BTreeSet<CanonicalUrl> = BTreeSet::new();
        let mut report = CrawlReport::default();

        while discovered.len() < config.max_pages {
            let Some(current) = frontier.next_url() else {
                break;
            };

            let outcome = self.fetcher.fetch(current.as_url()).await;
            if let (Some(status), Some(final_url)) = (outcome.status(), outcome.final_url()) {
                println!("[{}] {} -> {}", status, current, final_url);
            }

            let page = match outcome {
                FetchOutcome::Success(page) => page,
                FetchOutcome::NonOk { .. } => {
                    report.skipped += 1;
                    continue;
                }
                FetchOutcome::NonHtml {
                    final_url,
                    content_type,
                    ..
                } => {
                    debug!("Not HTML ({:?}): {}", content_type, final_url);
                    report.skipped += 1;
                    continue;
                }
                FetchOutcome::TransportError(message) => {
                    println!("[ERR] {} -> {}", current, message);
                    warn!("Fetch failed for {}: {}", current, message);
                    report.transport_errors += 1;
                    continue;
                }
            };

            if !frontier.is_same_host(&page.final_url) {
                debug!("{} redirected off-host to {}", current, page.final_url);
                report.skipped += 1;
                continue;
            }

            // The page is listed under the URL it actually ended up at
            let canonical = config.canonical_base.canonicalize(&page.final_url);
            if frontier.is_listed(canonical.path()) {
                discovered.insert(canonical);
            } else {
                debug!("Not listing excluded page {}", canonical);
            }

            let mut queued = 0;
            for link in extract_links(&page.body, &page.final_url) {
                if frontier.enqueue(link) {
                    queued += 1;
                }
            }
            debug!("{}: queued {} link(s)", current, queued);

            tokio::time::sleep(config.crawl_delay).await;
        }

        report.visited = frontier.visited_count();
        report.pending = frontier.pending();
        report.discovered = discovered.into_iter().collect();

        info!(
            "Crawl complete: {} page(s) discovered, {} URL(s) visited",
            report.discovered.len(),
            report.visited
        );
        report
    }
}

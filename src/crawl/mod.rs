// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Same-host restriction (host and port must match the start URL)
// - Path prefix exclusions applied before a link is ever queued
// - Every URL fetched at most once per run
// - Polite crawling with a delay between requests
// - Hard cap on the number of discovered pages
// =============================================================================

mod engine;
mod frontier;

pub use engine::{CrawlReport, Crawler};

// src/fetch/mod.rs
// =============================================================================
// Talking to the crawled site.
//
// Submodules:
// - http: reqwest-backed Fetcher (GET for pages, HEAD for Last-Modified)
// - html: pulls <a href> targets out of a fetched page
//
// A fetch never returns an error. Whatever happened is described by a
// FetchOutcome and the crawl engine decides what to do with it.
// =============================================================================

mod html;
mod http;

pub use html::extract_links;
pub use http::HttpFetcher;

use url::Url;

/// A successfully fetched HTML page.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    /// URL after following redirects
    pub final_url: Url,
    pub body: String,
}

#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// 200 OK with an HTML content type
    Success(Page),
    /// Any status other than 200
    NonOk { status: u16, final_url: Url },
    /// 200 OK, but not text/html (PDF, image, JSON...)
    NonHtml {
        status: u16,
        final_url: Url,
        content_type: Option<String>,
    },
    /// Connection refused, DNS failure, timeout, broken body...
    TransportError(String),
}

impl FetchOutcome {
    /// Status code to show in progress output, if a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchOutcome::Success(page) => Some(page.status),
            FetchOutcome::NonOk { status, .. } | FetchOutcome::NonHtml { status, .. } => {
                Some(*status)
            }
            FetchOutcome::TransportError(_) => None,
        }
    }

    pub fn final_url(&self) -> Option<&Url> {
        match self {
            FetchOutcome::Success(page) => Some(&page.final_url),
            FetchOutcome::NonOk { final_url, .. } | FetchOutcome::NonHtml { final_url, .. } => {
                Some(final_url)
            }
            FetchOutcome::TransportError(_) => None,
        }
    }
}

/// The HTTP side of the crawler. Single attempt per call, no retries.
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> FetchOutcome;

    /// Raw Last-Modified header of `url`, or None on any failure.
    async fn last_modified(&self, url: &str) -> Option<String>;
}

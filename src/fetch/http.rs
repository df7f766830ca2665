// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - GET a page, following redirects, and classify the response
// - HEAD a page to read its Last-Modified header (no body download)
// - Turn reqwest errors into short human-readable messages
//
// One client is built at startup and reused for every request, so connections
// to the crawled host are pooled.
// =============================================================================

use super::{FetchOutcome, Fetcher, Page};
use crate::error::Result;
use reqwest::header::{CONTENT_TYPE, LAST_MODIFIED};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchOutcome {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::TransportError(describe_error(&e)),
        };

        let status = response.status();
        let final_url = response.url().clone();

        if status != StatusCode::OK {
            return FetchOutcome::NonOk {
                status: status.as_u16(),
                final_url,
            };
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let is_html = content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("text/html"));
        if !is_html {
            return FetchOutcome::NonHtml {
                status: status.as_u16(),
                final_url,
                content_type,
            };
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Success(Page {
                status: status.as_u16(),
                final_url,
                body,
            }),
            Err(e) => FetchOutcome::TransportError(describe_error(&e)),
        }
    }

    async fn last_modified(&self, url: &str) -> Option<String> {
        let response = match self.client.head(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("HEAD {} failed: {}", url, describe_error(&e));
                return None;
            }
        };

        response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }
}

// Categorizes reqwest errors into a short message for the progress output
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure / connection refused
// - Too many redirects
// - Body decoding problems
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    }
}

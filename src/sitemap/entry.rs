// src/sitemap/entry.rs
// =============================================================================
// One <url> element of the sitemap, and how we build them.
//
// Building an entry costs one HEAD request (for Last-Modified). Probes can run
// a few at a time, but entries always come back in the order of the URLs.
// =============================================================================

use super::lastmod::{format_lastmod, resolve_last_modified};
use crate::config::Config;
use crate::fetch::Fetcher;
use crate::urls::CanonicalUrl;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use futures::stream::{self, StreamExt};
use serde::{Serialize, Serializer};

// Values allowed by the sitemap protocol for <changefreq>
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub loc: CanonicalUrl,
    // Same second-precision form as the XML
    #[serde(serialize_with = "serialize_lastmod")]
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: String,
}

fn serialize_lastmod<S>(lastmod: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_lastmod(lastmod))
}

// Probes every URL for its Last-Modified date and builds the entries
//
// The probe goes to the canonical (public) URL, since that is the address
// the sitemap advertises.
pub async fn build_entries<F: Fetcher>(
    urls: &[CanonicalUrl],
    fetcher: &F,
    config: &Config,
) -> Vec<SitemapEntry> {
    stream::iter(urls)
        .map(|loc| async move {
            let header = fetcher.last_modified(loc.as_str()).await;
            SitemapEntry {
                loc: loc.clone(),
                lastmod: resolve_last_modified(header.as_deref(), Utc::now()),
                changefreq: config.changefreq,
                priority: config.priority.clone(),
            }
        })
        // buffered (not buffer_unordered) keeps the input order
        .buffered(config.probe_concurrency.max(1))
        .collect()
        .await
}

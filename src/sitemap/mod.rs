// src/sitemap/mod.rs
// =============================================================================
// This module turns the crawl result into sitemap.xml.
//
// Submodules:
// - entry: <url> entries, changefreq values, Last-Modified probing
// - lastmod: HTTP date parsing and W3C datetime formatting
// - xml: document rendering
//
// The generator only needs the sorted URL list from the crawl, nothing else
// from the crawler's state.
// =============================================================================

mod entry;
mod lastmod;
mod xml;

pub use entry::{ChangeFreq, SitemapEntry};

use crate::config::Config;
use crate::error::{Result, SitemapError};
use crate::fetch::Fetcher;
use crate::urls::CanonicalUrl;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    // Builds one entry per URL, in the given order
    pub async fn generate<F: Fetcher>(urls: &[CanonicalUrl], fetcher: &F, config: &Config) -> Self {
        let entries = entry::build_entries(urls, fetcher, config).await;
        Self { entries }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn to_xml(&self) -> String {
        xml::render(&self.entries)
    }

    /// Writes the document, replacing any existing file.
    pub async fn write_to(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, self.to_xml())
            .await
            .map_err(|source| SitemapError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Wrote {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::HttpFetcher;
    use crate::urls::CanonicalBase;
    use std::time::Duration;
    use url::Url;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // Probe stub answering from a fixed table
    struct Headers(Vec<(&'static str, &'static str)>);

    impl Fetcher for Headers {
        async fn fetch(&self, _url: &Url) -> crate::fetch::FetchOutcome {
            crate::fetch::FetchOutcome::TransportError("not used".to_string())
        }

        async fn last_modified(&self, url: &str) -> Option<String> {
            self.0
                .iter()
                .find(|(u, _)| *u == url)
                .map(|(_, h)| h.to_string())
        }
    }

    fn config(base: &str) -> Config {
        Config::new(
            Url::parse("http://site/").unwrap(),
            CanonicalBase::parse(base).unwrap(),
        )
    }

    fn urls(base: &CanonicalBase, paths: &[&str]) -> Vec<CanonicalUrl> {
        paths
            .iter()
            .map(|p| base.canonicalize(&Url::parse(&format!("http://site{}", p)).unwrap()))
            .collect()
    }

    #[tokio::test]
    async fn test_two_entry_document() {
        let config = config("https://example.com");
        let urls = urls(&config.canonical_base, &["/", "/a"]);
        let probe = Headers(vec![("https://example.com/a", "Wed, 21 Oct 2015 07:28:00 GMT")]);

        let xml = Sitemap::generate(&urls, &probe, &config).await.to_xml();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
        assert_eq!(xml.matches("<priority>0.5</priority>").count(), 2);
        assert!(xml.contains("<lastmod>2015-10-21T07:28:00+00:00</lastmod>"));
        assert!(!xml.contains("<lastmod></lastmod>"));

        let root = xml.find("<loc>https://example.com/</loc>").unwrap();
        let a = xml.find("<loc>https://example.com/a</loc>").unwrap();
        assert!(root < a);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[tokio::test]
    async fn test_element_order_within_url() {
        let config = config("https://example.com");
        let urls = urls(&config.canonical_base, &["/"]);
        let xml = Sitemap::generate(&urls, &Headers(vec![]), &config).await.to_xml();

        let positions: Vec<_> = ["<loc>", "<lastmod>", "<changefreq>", "<priority>"]
            .iter()
            .map(|tag| xml.find(tag).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_missing_header_falls_back_to_now() {
        let config = config("https://example.com");
        let urls = urls(&config.canonical_base, &["/"]);

        let before = chrono::Utc::now() - chrono::Duration::seconds(1);
        let sitemap = Sitemap::generate(&urls, &Headers(vec![]), &config).await;
        let after = chrono::Utc::now() + chrono::Duration::seconds(1);

        let lastmod = sitemap.entries()[0].lastmod;
        assert!(lastmod >= before && lastmod <= after);
    }

    #[tokio::test]
    async fn test_configured_changefreq_and_priority() {
        let mut config = config("https://example.com");
        config.changefreq = ChangeFreq::Daily;
        config.priority = "0.8".to_string();
        let urls = urls(&config.canonical_base, &["/", "/b"]);

        let xml = Sitemap::generate(&urls, &Headers(vec![]), &config).await.to_xml();
        assert_eq!(xml.matches("<changefreq>daily</changefreq>").count(), 2);
        assert_eq!(xml.matches("<priority>0.8</priority>").count(), 2);
    }

    #[tokio::test]
    async fn test_loc_is_escaped() {
        let config = config("https://example.com");
        let urls = urls(&config.canonical_base, &["/tom&jerry"]);
        let xml = Sitemap::generate(&urls, &Headers(vec![]), &config).await.to_xml();
        assert!(xml.contains("<loc>https://example.com/tom&amp;jerry</loc>"));
    }

    #[tokio::test]
    async fn test_empty_sitemap() {
        let config = config("https://example.com");
        let xml = Sitemap::generate(&[], &Headers(vec![]), &config).await.to_xml();
        assert_eq!(xml.matches("<url>").count(), 0);
        assert!(xml.contains("</urlset>"));
    }

    #[tokio::test]
    async fn test_probes_over_http_and_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/a"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("last-modified", "Fri, 01 Mar 2024 10:00:00 GMT")
                    // Slow first probe must not reorder the output
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/b"))
            .respond_with(
                ResponseTemplate::new(200).insert_header("last-modified", "garbage"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config(&server.uri());
        config.probe_concurrency = 4;
        let urls = urls(&config.canonical_base, &["/a", "/b"]);
        let fetcher = HttpFetcher::new("SimpleCrawler/1.0", Duration::from_secs(5)).unwrap();

        let sitemap = Sitemap::generate(&urls, &fetcher, &config).await;
        let entries = sitemap.entries();

        assert_eq!(entries[0].loc.path(), "/a");
        assert_eq!(
            lastmod::format_lastmod(&entries[0].lastmod),
            "2024-03-01T10:00:00+00:00"
        );
        assert_eq!(entries[1].loc.path(), "/b");
        assert!(entries[1].lastmod.timestamp() > 1_709_287_200);
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sitemap.xml");
        let config = config("https://example.com");
        let urls = urls(&config.canonical_base, &["/"]);

        let sitemap = Sitemap::generate(&urls, &Headers(vec![]), &config).await;
        sitemap.write_to(&out).await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, sitemap.to_xml());
    }

    #[tokio::test]
    async fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no/such/dir/sitemap.xml");
        let config = config("https://example.com");

        let sitemap = Sitemap::generate(&[], &Headers(vec![]), &config).await;
        let err = sitemap.write_to(&out).await.unwrap_err();
        assert!(matches!(err, SitemapError::Write { .. }));
    }
}

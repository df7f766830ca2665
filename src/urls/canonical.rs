// src/urls/canonical.rs
// =============================================================================
// Canonical URLs: the public address a page gets in the sitemap.
//
// We often crawl a staging host (http://localhost:8000) but publish the
// sitemap for the real site (https://www.example.com). The canonical form
// keeps only the path of the crawled URL and puts it under the configured
// base scheme and host.
//
//   http://localhost:8000/docs?x=1  ->  https://www.example.com/docs
//   http://localhost:8000           ->  https://www.example.com/
// =============================================================================

use crate::error::{Result, SitemapError};
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

use super::normalize::host_key;

/// A sitemap <loc>. Ordered lexicographically by its full string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalUrl {
    loc: String,
    path_start: usize,
}

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.loc
    }

    pub fn path(&self) -> &str {
        &self.loc[self.path_start..]
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.loc)
    }
}

impl Serialize for CanonicalUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.loc)
    }
}

/// Scheme and host every canonical URL is rewritten to.
#[derive(Debug, Clone)]
pub struct CanonicalBase {
    origin: String,
}

impl CanonicalBase {
    // Parses the configured base, e.g. "https://www.example.com"
    //
    // Any path, query or fragment on the base is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: String| SitemapError::InvalidUrl {
            what: "canonical base",
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        let authority = host_key(&url).ok_or_else(|| invalid("missing host".to_string()))?;

        Ok(Self {
            origin: format!("{}://{}", url.scheme(), authority),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Never fails: an empty path becomes "/".
    pub fn canonicalize(&self, url: &Url) -> CanonicalUrl {
        let path = url.path();
        let loc = if path.is_empty() {
            format!("{}/", self.origin)
        } else if path.starts_with('/') {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}/{}", self.origin, path)
        };

        CanonicalUrl {
            loc,
            path_start: self.origin.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CanonicalBase {
        CanonicalBase::parse("https://www.example.com").unwrap()
    }

    fn canon(raw: &str) -> CanonicalUrl {
        base().canonicalize(&Url::parse(raw).unwrap())
    }

    #[test]
    fn test_swaps_scheme_and_host() {
        let c = canon("http://localhost:8000/docs/intro");
        assert_eq!(c.as_str(), "https://www.example.com/docs/intro");
        assert_eq!(c.path(), "/docs/intro");
    }

    #[test]
    fn test_root_path() {
        assert_eq!(canon("http://localhost").as_str(), "https://www.example.com/");
        assert_eq!(canon("http://localhost").path(), "/");
    }

    #[test]
    fn test_drops_query_and_fragment() {
        assert_eq!(
            canon("http://localhost/a?b=c#d").as_str(),
            "https://www.example.com/a"
        );
    }

    #[test]
    fn test_input_origin_does_not_matter() {
        assert_eq!(canon("https://other.org/p"), canon("http://localhost:1/p"));
    }

    #[test]
    fn test_base_path_is_ignored_and_port_kept() {
        let base = CanonicalBase::parse("http://www.example.com:8443/blog/?x=1").unwrap();
        assert_eq!(base.origin(), "http://www.example.com:8443");
        let c = base.canonicalize(&Url::parse("http://h/post").unwrap());
        assert_eq!(c.as_str(), "http://www.example.com:8443/post");
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(CanonicalBase::parse("www.example.com").is_err());
        assert!(CanonicalBase::parse("ftp://example.com").is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut urls = vec![canon("http://h/b"), canon("http://h/"), canon("http://h/a")];
        urls.sort();
        let locs: Vec<_> = urls.iter().map(|u| u.as_str()).collect();
        assert_eq!(
            locs,
            [
                "https://www.example.com/",
                "https://www.example.com/a",
                "https://www.example.com/b"
            ]
        );
    }
}

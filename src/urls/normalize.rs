// src/urls/normalize.rs
// =============================================================================
// URL normalization: the identity used to decide "have we seen this page?"
//
// Rules:
// - Only http and https URLs survive (mailto:, javascript:, tel:, ftp: ... are
//   rejected by returning None)
// - Query string and fragment are dropped: /a?x=1#top is the same page as /a
// - A trailing run of slashes collapses to one (http://host// -> http://host/)
// - /x and /x/ are NOT merged, they stay two different pages
//
// Normalization is pure and idempotent: normalize(normalize(u)) == normalize(u).
// =============================================================================

use std::fmt;
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// An absolute http(s) URL without query or fragment. Used as the visited key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(Url);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }

    /// host[:port] of this URL, the unit of "same site"
    pub fn host_key(&self) -> String {
        // normalize() only admits URLs with a host
        host_key(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

// Normalizes an absolute URL string
//
// Returns None when the string does not parse, has no host, or uses a scheme
// other than http/https. Relative URLs must be joined against their page
// before they get here.
pub fn normalize(raw: &str) -> Option<NormalizedUrl> {
    let url = Url::parse(raw).ok()?;
    normalize_url(url)
}

pub fn normalize_url(mut url: Url) -> Option<NormalizedUrl> {
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return None;
    }
    url.host_str()?;

    url.set_query(None);
    url.set_fragment(None);

    if url.path().ends_with("//") {
        let collapsed = format!("{}/", url.path().trim_end_matches('/'));
        url.set_path(&collapsed);
    }

    Some(NormalizedUrl(url))
}

/// The network location (host plus explicit non-default port) of a URL.
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

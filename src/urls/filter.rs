// src/urls/filter.rs
// =============================================================================
// Path prefix blocklist.
//
// A path is excluded when it starts with any configured prefix. The match is
// a plain, case-sensitive string prefix: "/admin" excludes "/admin/users"
// and also "/administrator", but not "/Admin".
//
// URL paths arrive percent-encoded ("/%C3%BCber"). A path is checked both as
// given and decoded, so "/über" and its encoded form exclude the same pages.
// =============================================================================

use std::borrow::Cow;

#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    excluded: Vec<String>,
}

impl PathFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    // Parses "/admin, /login,,/panel" into ["/admin", "/login", "/panel"]
    pub fn from_csv(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|prefix| !prefix.is_empty()),
        )
    }

    pub fn is_included(&self, path: &str) -> bool {
        let decoded = urlencoding::decode(path).unwrap_or(Cow::Borrowed(path));
        !self.excluded.iter().any(|prefix| {
            path.starts_with(prefix.as_str()) || decoded.starts_with(prefix.as_str())
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_subtree() {
        let filter = PathFilter::from_csv("/admin");
        assert!(!filter.is_included("/admin"));
        assert!(!filter.is_included("/admin/x"));
        assert!(filter.is_included("/"));
        assert!(filter.is_included("/docs/admin"));
    }

    // The prefix is not segment-aware: "/adminX" starts with "/admin" and is
    // excluded along with the real admin subtree.
    #[test]
    fn test_prefix_match_is_literal() {
        let filter = PathFilter::from_csv("/admin");
        assert!(!filter.is_included("/adminX"));
        assert!(!filter.is_included("/administrator/login"));
    }

    #[test]
    fn test_case_sensitive() {
        let filter = PathFilter::from_csv("/admin");
        assert!(filter.is_included("/Admin/x"));
    }

    #[test]
    fn test_non_ascii_prefix_matches_encoded_path() {
        let filter = PathFilter::from_csv("/über");
        let path = url::Url::parse("http://site/über/team").unwrap().path().to_string();
        assert_eq!(path, "/%C3%BCber/team");
        assert!(!filter.is_included(&path));
        assert!(filter.is_included("/uber/team"));
    }

    #[test]
    fn test_encoded_prefix_still_matches() {
        let filter = PathFilter::from_csv("/%C3%BCber");
        assert!(!filter.is_included("/%C3%BCber/team"));
    }

    #[test]
    fn test_invalid_utf8_escape_checked_as_given() {
        let filter = PathFilter::from_csv("/admin");
        assert!(!filter.is_included("/admin/%FF"));
        assert!(filter.is_included("/docs/%FF"));
    }

    #[test]
    fn test_csv_parsing() {
        let filter = PathFilter::from_csv(" /admin, /login ,,/panel ,");
        assert_eq!(filter.prefixes(), ["/admin", "/login", "/panel"]);
    }

    #[test]
    fn test_empty_filter_includes_everything() {
        let filter = PathFilter::from_csv("");
        assert!(filter.prefixes().is_empty());
        assert!(filter.is_included("/admin"));
    }
}

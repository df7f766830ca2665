// src/fetch/html.rs
// =============================================================================
// This module extracts link targets from fetched HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The `url` crate resolves relative hrefs against the page they came from.
// Scheme filtering and deduplication happen later, in the frontier.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts every <a href> target from a page, resolved to an absolute URL
//
// Parameters:
//   html: the HTML content to parse
//   page_url: the final (post-redirect) URL of the page
//
// Returns: absolute URLs in document order, duplicates included
//
// Example:
//   html = "<a href='../docs'>Docs</a>"
//   page_url = "https://example.com/blog/post"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(page_url, href))
        .collect()
}

// Resolves a (possibly relative) href against the page URL
//
// Skips empty hrefs, in-page anchors and the non-web schemes that commonly
// show up in navigation markup. Anything else that is not http(s) is left for
// the normalizer to reject.
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    base.join(href).ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does base.join(href) do?
//    - Resolves href the way a browser would
//    - "/docs" replaces the path, "docs" is relative to the current directory,
//      "https://other.org" ignores the base entirely
//
// 2. Why the final_url and not the URL we asked for?
//    - After a redirect, relative links are relative to where we landed
//
// 3. Why filter_map?
//    - It maps and drops the None results in one step
// -----------------------------------------------------------------------------

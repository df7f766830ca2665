// src/sitemap/lastmod.rs
// =============================================================================
// Last-Modified handling.
//
// Servers send HTTP dates ("Wed, 21 Oct 2015 07:28:00 GMT"); sitemaps want
// W3C datetimes ("2015-10-21T07:28:00+00:00"). Anything we can't read falls
// back to the time the sitemap is generated.
// =============================================================================

use chrono::{DateTime, NaiveDateTime, Utc};

// Layouts tried after RFC 2822 fails
const FALLBACK_FORMATS: [&str; 2] = ["%a, %d %b %Y %H:%M:%S GMT", "%a, %d %b %Y %H:%M:%S UTC"];

pub fn parse_last_modified(header: &str) -> Option<DateTime<Utc>> {
    let header = header.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(header) {
        return Some(dt.with_timezone(&Utc));
    }

    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(header, format).ok())
        .map(|naive| naive.and_utc())
}

/// Header value if usable, otherwise `now`.
pub fn resolve_last_modified(header: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    header.and_then(parse_last_modified).unwrap_or(now)
}

/// Second precision, explicit UTC offset.
pub fn format_lastmod(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}

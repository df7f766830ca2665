// src/error.rs
// =============================================================================
// Fatal errors.
//
// Anything that goes wrong for a single page (timeouts, 404s, PDFs, broken
// hrefs) is NOT an error here - the crawler just skips that page. The
// variants below are the failures that stop the whole run.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Invalid {what} URL '{url}': {reason}")]
    InvalidUrl {
        what: &'static str,
        url: String,
        reason: String,
    },

    #[error("Invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to write sitemap to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SitemapError>;

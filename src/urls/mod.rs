// src/urls/mod.rs
// =============================================================================
// Everything that decides the identity of a URL.
//
// Submodules:
// - normalize: visited-set key (scheme check, no query/fragment)
// - canonical: sitemap <loc> under the public base origin
// - filter: path prefix blocklist
// =============================================================================

mod canonical;
mod filter;
mod normalize;

pub use canonical::{CanonicalBase, CanonicalUrl};
pub use filter::PathFilter;
pub use normalize::{host_key, normalize, normalize_url, NormalizedUrl};

// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: pending queue + visited set + admission rules.
//
// Per URL the lifecycle is  unseen -> queued -> visited,  and visited is
// final. A URL becomes visited the moment it is handed out for fetching,
// before any network I/O, so a page that always fails is tried exactly once.
//
// The queue itself is not deduplicated. A link found on five pages is queued
// five times; the first dequeue marks it visited and the other four are
// dropped when they reach the front.
//
// All "should we touch this URL?" decisions go through admit(), both when a
// link is queued and when it is dequeued.
// =============================================================================

use crate::urls::{host_key, normalize, normalize_url, NormalizedUrl, PathFilter};
use std::collections::{HashSet, VecDeque};
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    AlreadyVisited,
    OffHost,
    Excluded,
}

#[derive(Debug)]
pub struct Frontier {
    // FIFO gives breadth-first order
    queue: VecDeque<String>,
    visited: HashSet<NormalizedUrl>,
    host: String,
    filter: PathFilter,
}

impl Frontier {
    // The seed goes in as-is; it is normalized on dequeue like everything else
    pub fn new(seed: &Url, filter: PathFilter) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(seed.to_string());

        Self {
            queue,
            visited: HashSet::new(),
            host: host_key(seed).unwrap_or_default(),
            filter,
        }
    }

    pub fn admit(&self, url: &NormalizedUrl) -> Admission {
        if self.visited.contains(url) {
            Admission::AlreadyVisited
        } else if url.host_key() != self.host {
            Admission::OffHost
        } else if !self.filter.is_included(url.path()) {
            Admission::Excluded
        } else {
            Admission::Admitted
        }
    }

    /// Path filter check used for deciding whether a fetched page is listed.
    pub fn is_listed(&self, path: &str) -> bool {
        self.filter.is_included(path)
    }

    // Redirects can leave the crawled host; such pages are never listed
    pub fn is_same_host(&self, url: &Url) -> bool {
        host_key(url).is_some_and(|key| key == self.host)
    }

    // Pops candidates until one is admitted, marks it visited and returns it
    //
    // Returns None once the queue is exhausted.
    pub fn next_url(&mut self) -> Option<NormalizedUrl> {
        while let Some(raw) = self.queue.pop_front() {
            let Some(url) = normalize(&raw) else {
                debug!("Dropping unnormalizable candidate {}", raw);
                continue;
            };

            match self.admit(&url) {
                Admission::Admitted => {
                    self.visited.insert(url.clone());
                    return Some(url);
                }
                reason => debug!("Skipping {} on dequeue: {:?}", url, reason),
            }
        }
        None
    }

    // Queues a link found on a page. Returns true if it was queued.
    pub fn enqueue(&mut self, link: Url) -> bool {
        let Some(url) = normalize_url(link) else {
            return false;
        };

        match self.admit(&url) {
            Admission::Admitted => {
                self.queue.push_back(url.as_str().to_owned());
                true
            }
            reason => {
                debug!("Not queueing {}: {:?}", url, reason);
                false
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the queue a VecDeque<String> and not a VecDeque<NormalizedUrl>?
//    - The seed is queued exactly as the user typed it
//    - Everything is normalized on the way out, so one code path handles both
//
// 2. What is let-else?
//    - let Some(url) = normalize(&raw) else { continue };
//    - Binds url when the pattern matches, otherwise runs the else block,
//      which must leave the current scope (continue, return, break...)
//
// 3. Why does admit() return an enum instead of a bool?
//    - The debug log can say WHY a URL was dropped
//    - The compiler makes sure every reason is handled in a match
// -----------------------------------------------------------------------------

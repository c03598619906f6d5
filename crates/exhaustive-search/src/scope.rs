//! Per-search bookkeeping shared by every branch of one search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Scope for one search invocation.
///
/// Tracks when the search started and how many nodes (permutations
/// evaluated or subset-sum calls made) it has explored so far. The node
/// counter is atomic so parallel branches can share one scope.
#[derive(Debug)]
pub struct SearchScope {
    start_time: Instant,
    node_count: AtomicU64,
}

impl SearchScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            node_count: AtomicU64::new(0),
        }
    }

    /// Time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Number of nodes explored so far.
    pub fn node_count(&self) -> u64 {
        self.node_count.load(Ordering::Relaxed)
    }

    /// Records one explored node and returns the new total.
    pub fn increment_node_count(&self) -> u64 {
        self.node_count.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}

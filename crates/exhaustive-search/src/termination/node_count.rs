//! Explored node count termination.

use std::fmt::Debug;

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once a number of nodes has been explored.
///
/// A search limited to `n` nodes finishes normally if it needs at most `n`
/// nodes and is cancelled when it would start node `n + 1`.
///
/// # Example
///
/// ```
/// use exhaustive_search::termination::NodeCountTermination;
///
/// // Explore at most 10 000 permutations
/// let term = NodeCountTermination::new(10_000);
/// ```
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.node_count() >= self.limit
    }
}

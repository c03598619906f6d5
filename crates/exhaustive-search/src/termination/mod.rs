//! Termination conditions for cancelling a running search.
//!
//! A search checks its termination before every node it explores. When the
//! condition fires the search stops and reports
//! [`SearchError::Cancelled`](exhaustive_core::SearchError::Cancelled).

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use composite::{AndTermination, OrTermination};
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
///
/// `Sync` is required because parallel tour search checks the same
/// termination from several worker threads.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }
}

/// Any of the boxed terminations fires. An empty list never fires.
impl<'a> Termination for Vec<Box<dyn Termination + 'a>> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.iter().any(|t| t.is_terminated(scope))
    }
}

#[cfg(test)]
mod tests;

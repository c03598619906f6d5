//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};

use super::Termination;
use crate::scope::SearchScope;

/// Terminates when an external flag is set.
///
/// Allows external code, typically another thread, to cancel a search by
/// setting an `AtomicBool`.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use exhaustive_search::termination::ExternalTermination;
/// use exhaustive_search::{SearchError, Searcher};
///
/// let flag = AtomicBool::new(false);
/// let searcher = Searcher::new().with_termination(ExternalTermination::new(&flag));
///
/// flag.store(true, Ordering::SeqCst);
/// let result = searcher.has_subset_summing_to(&[1, 2, 3], 6);
/// assert_eq!(result, Err(SearchError::Cancelled));
/// ```
#[derive(Debug)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

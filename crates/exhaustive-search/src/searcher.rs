//! Configurable entry point for the brute-force searches.

use std::fmt::Debug;

use tracing::{debug, info, warn};

use exhaustive_config::{PruningMode, SearchConfig, ThreadCount};
use exhaustive_core::{DistanceMatrix, Result, SearchError};

use crate::scope::SearchScope;
use crate::termination::{NodeCountTermination, Termination, TimeTermination};
use crate::{subset, tour};

/// Runs tour and subset-sum searches with optional cancellation,
/// parallelism and pruning policy.
///
/// The free functions of this crate use `Searcher::new()`: no termination,
/// single-threaded, [`PruningMode::Auto`].
///
/// # Example
///
/// ```
/// use exhaustive_core::DistanceMatrix;
/// use exhaustive_search::termination::NodeCountTermination;
/// use exhaustive_search::{SearchError, Searcher};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).unwrap();
///
/// let searcher = Searcher::new();
/// assert_eq!(searcher.has_tour_under(&[0, 1, 2], &matrix, 35), Ok(true));
///
/// // Only two of the six permutations may be evaluated.
/// let limited = Searcher::new().with_termination(NodeCountTermination::new(2));
/// assert_eq!(limited.has_tour_under(&[0, 1, 2], &matrix, 5), Err(SearchError::Cancelled));
/// ```
#[derive(Debug, Default)]
pub struct Searcher<'t> {
    termination: Option<Box<dyn Termination + 't>>,
    thread_count: ThreadCount,
    pruning: PruningMode,
}

impl<'t> Searcher<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a searcher from a loaded configuration.
    ///
    /// Configured time and node limits are combined so that whichever is
    /// reached first cancels the search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid.
    pub fn from_config(config: &SearchConfig) -> Result<Searcher<'static>> {
        config.validate()?;

        let mut terminations: Vec<Box<dyn Termination>> = Vec::new();
        if let Some(limit) = config.time_limit() {
            terminations.push(Box::new(TimeTermination::new(limit)));
        }
        if let Some(limit) = config.node_limit() {
            terminations.push(Box::new(NodeCountTermination::new(limit)));
        }

        let mut searcher = Searcher::new()
            .with_thread_count(config.thread_count)
            .with_pruning(config.subset_pruning);
        if !terminations.is_empty() {
            searcher = searcher.with_termination(terminations);
        }
        Ok(searcher)
    }

    /// Sets the condition that cancels a running search.
    pub fn with_termination(mut self, termination: impl Termination + 't) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Sets how many threads tour searches may use.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets the subset-sum pruning policy.
    pub fn with_pruning(mut self, pruning: PruningMode) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn thread_count(&self) -> ThreadCount {
        self.thread_count
    }

    pub fn pruning(&self) -> PruningMode {
        self.pruning
    }

    /// Accounts for one explored node, failing if the search must stop.
    pub(crate) fn enter_node(&self, scope: &SearchScope) -> Result<()> {
        if let Some(termination) = &self.termination {
            if termination.is_terminated(scope) {
                return Err(SearchError::Cancelled);
            }
        }
        scope.increment_node_count();
        Ok(())
    }

    /// Returns true if some ordering of `cities` has an open-walk cost
    /// strictly below `threshold`.
    pub fn has_tour_under(
        &self,
        cities: &[usize],
        matrix: &DistanceMatrix,
        threshold: i64,
    ) -> Result<bool> {
        self.find_tour_under(cities, matrix, threshold)
            .map(|tour| tour.is_some())
    }

    /// Returns the first ordering of `cities` whose open-walk cost is
    /// strictly below `threshold`, if any.
    ///
    /// Sequential searches return the first such ordering in permutation
    /// order. Parallel searches return whichever branch finds one first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] for cities outside the matrix or
    /// when the costliest possible tour over `cities` could overflow `i64`.
    pub fn find_tour_under(
        &self,
        cities: &[usize],
        matrix: &DistanceMatrix,
        threshold: i64,
    ) -> Result<Option<Vec<usize>>> {
        if let Some(city) = matrix.first_unknown_city(cities) {
            return Err(SearchError::invalid_input(format!(
                "city {city} is outside the {}-city distance matrix",
                matrix.size()
            )));
        }
        tour::check_cost_bound(matrix, cities)?;

        let scope = SearchScope::new();
        info!(
            event = "search_start",
            search = "tour",
            cities = cities.len(),
            threshold = threshold,
            threads = ?self.thread_count,
        );

        let result = match self.thread_count {
            ThreadCount::None => tour::search_sequential(self, cities, matrix, threshold, &scope),
            threads => tour::parallel::search(self, threads, cities, matrix, threshold, &scope),
        };
        self.report("tour", &scope, &result);
        result
    }

    /// Returns true if some selection of `nums` (by index) sums to `target`.
    pub fn has_subset_summing_to(&self, nums: &[i64], target: i64) -> Result<bool> {
        self.find_subset(nums, target).map(|subset| subset.is_some())
    }

    /// Returns the ascending indices of the first subset of `nums` found to
    /// sum to `target`, if any.
    pub fn find_subset(&self, nums: &[i64], target: i64) -> Result<Option<Vec<usize>>> {
        let scope = SearchScope::new();
        let prune = match self.pruning {
            PruningMode::Auto => nums.iter().all(|&n| n >= 0),
            PruningMode::Disabled => false,
        };
        info!(
            event = "search_start",
            search = "subset_sum",
            elements = nums.len(),
            target = target,
            prune = prune,
        );

        let result = subset::search(self, nums, target, prune, &scope);
        self.report("subset_sum", &scope, &result);
        result
    }

    fn report<T: Debug>(&self, search: &'static str, scope: &SearchScope, result: &Result<Option<T>>) {
        let duration_ms = scope.elapsed().as_millis() as u64;
        match result {
            Ok(witness) => {
                if let Some(witness) = witness {
                    debug!(event = "witness_found", search = search, witness = ?witness);
                }
                info!(
                    event = "search_end",
                    search = search,
                    found = witness.is_some(),
                    nodes = scope.node_count(),
                    duration_ms = duration_ms,
                );
            }
            Err(SearchError::Cancelled) => warn!(
                event = "search_cancelled",
                search = search,
                nodes = scope.node_count(),
                duration_ms = duration_ms,
            ),
            Err(err) => warn!(
                event = "search_failed",
                search = search,
                error = %err,
                nodes = scope.node_count(),
            ),
        }
    }
}

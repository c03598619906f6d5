//! Parallel tour search on a rayon pool.
//!
//! The permutations of `cities` are split by their first city: branch `j`
//! fixes `cities[j]` in front and enumerates the permutations of the rest.
//! Each branch owns its scratch buffer; only the search scope is shared.

use rayon::prelude::*;

use exhaustive_config::ThreadCount;
use exhaustive_core::{DistanceMatrix, Result, SearchError};

use super::{search_sequential, walk_cost};
use crate::permutation::permutations;
use crate::scope::SearchScope;
use crate::searcher::Searcher;

pub(crate) fn search(
    searcher: &Searcher<'_>,
    threads: ThreadCount,
    cities: &[usize],
    matrix: &DistanceMatrix,
    threshold: i64,
    scope: &SearchScope,
) -> Result<Option<Vec<usize>>> {
    if cities.len() < 2 {
        return search_sequential(searcher, cities, matrix, threshold, scope);
    }

    let run = || search_branches(searcher, cities, matrix, threshold, scope);
    match threads {
        ThreadCount::None | ThreadCount::Auto => run(),
        ThreadCount::Count(count) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(count)
                .build()
                .map_err(|err| SearchError::Config(format!("cannot build thread pool: {err}")))?;
            pool.install(run)
        }
    }
}

fn search_branches(
    searcher: &Searcher<'_>,
    cities: &[usize],
    matrix: &DistanceMatrix,
    threshold: i64,
    scope: &SearchScope,
) -> Result<Option<Vec<usize>>> {
    let found = (0..cities.len())
        .into_par_iter()
        .map(|first| search_branch(searcher, cities, first, matrix, threshold, scope))
        .find_map_any(|outcome| match outcome {
            Ok(None) => None,
            decided => Some(decided),
        });
    found.unwrap_or(Ok(None))
}

fn search_branch(
    searcher: &Searcher<'_>,
    cities: &[usize],
    first: usize,
    matrix: &DistanceMatrix,
    threshold: i64,
    scope: &SearchScope,
) -> Result<Option<Vec<usize>>> {
    let rest: Vec<usize> = cities
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != first)
        .map(|(_, &city)| city)
        .collect();

    let mut tour = Vec::with_capacity(cities.len());
    for tail in permutations(&rest) {
        searcher.enter_node(scope)?;
        tour.clear();
        tour.push(cities[first]);
        tour.extend_from_slice(&tail);
        if walk_cost(matrix, &tour)? < threshold {
            return Ok(Some(tour));
        }
    }
    Ok(None)
}

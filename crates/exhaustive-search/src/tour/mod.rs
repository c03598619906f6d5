//! Brute-force tour evaluation over a distance matrix.
//!
//! Tours are open walks: the cost of `[a, b, c]` is `d(a, b) + d(b, c)` with
//! no edge back to the start. Deciding whether any ordering of N cities beats
//! a threshold enumerates all N! permutations, O(N!·N), so only small city
//! sets are practical.

pub(crate) mod parallel;

use exhaustive_core::{DistanceMatrix, Result, SearchError};

use crate::permutation::permutations;
use crate::scope::SearchScope;
use crate::searcher::Searcher;

/// Cost of walking `tour` in order.
///
/// Empty and single-city tours cost 0.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if a city is outside the matrix or
/// the total overflows `i64`.
///
/// # Example
///
/// ```
/// use exhaustive_core::DistanceMatrix;
/// use exhaustive_search::tour_cost;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).unwrap();
/// assert_eq!(tour_cost(&matrix, &[0, 1, 2]), Ok(30));
/// ```
pub fn tour_cost(matrix: &DistanceMatrix, tour: &[usize]) -> Result<i64> {
    if let Some(city) = matrix.first_unknown_city(tour) {
        return Err(SearchError::invalid_input(format!(
            "city {city} is outside the {}-city distance matrix",
            matrix.size()
        )));
    }
    walk_cost(matrix, tour)
}

/// Returns true if `tour` costs strictly less than `threshold`.
pub fn verify_tour_cost(matrix: &DistanceMatrix, tour: &[usize], threshold: i64) -> Result<bool> {
    Ok(tour_cost(matrix, tour)? < threshold)
}

/// Returns true if some ordering of `cities` costs strictly less than
/// `threshold`.
///
/// Stops at the first qualifying permutation, which is not necessarily the
/// cheapest.
pub fn has_tour_under(cities: &[usize], matrix: &DistanceMatrix, threshold: i64) -> Result<bool> {
    Searcher::new().has_tour_under(cities, matrix, threshold)
}

/// Returns the first ordering of `cities`, in permutation order, that costs
/// strictly less than `threshold`.
pub fn find_tour_under(
    cities: &[usize],
    matrix: &DistanceMatrix,
    threshold: i64,
) -> Result<Option<Vec<usize>>> {
    Searcher::new().find_tour_under(cities, matrix, threshold)
}

/// Rejects city sets whose costliest possible tour could overflow `i64`.
///
/// Bounds every tour by `max_leg * (cities.len() - 1)`, where `max_leg` is
/// the largest cost between two cities of the set. Once this holds, no
/// permutation can fail mid-search, so sequential and parallel searches
/// reach the same answer.
pub(crate) fn check_cost_bound(matrix: &DistanceMatrix, cities: &[usize]) -> Result<()> {
    let max_leg = cities
        .iter()
        .enumerate()
        .flat_map(|(i, &from)| {
            cities
                .iter()
                .enumerate()
                .filter(move |&(j, _)| j != i)
                .filter_map(move |(_, &to)| matrix.get(from, to))
        })
        .max()
        .unwrap_or(0);
    let legs = cities.len().saturating_sub(1);

    i64::try_from(legs)
        .ok()
        .and_then(|legs| max_leg.checked_mul(legs))
        .map(|_| ())
        .ok_or_else(|| {
            SearchError::invalid_input(format!(
                "tours over {} cities with legs up to {max_leg} may overflow i64",
                cities.len()
            ))
        })
}

/// Sums consecutive legs. Callers have already checked the cities.
pub(crate) fn walk_cost(matrix: &DistanceMatrix, tour: &[usize]) -> Result<i64> {
    tour.windows(2).try_fold(0i64, |total, leg| {
        let cost = matrix.get(leg[0], leg[1]).ok_or_else(|| {
            SearchError::invalid_input(format!("no distance from {} to {}", leg[0], leg[1]))
        })?;
        total
            .checked_add(cost)
            .ok_or_else(|| SearchError::invalid_input("tour cost overflows i64"))
    })
}

pub(crate) fn search_sequential(
    searcher: &Searcher<'_>,
    cities: &[usize],
    matrix: &DistanceMatrix,
    threshold: i64,
    scope: &SearchScope,
) -> Result<Option<Vec<usize>>> {
    for tour in permutations(cities) {
        searcher.enter_node(scope)?;
        if walk_cost(matrix, &tour)? < threshold {
            return Ok(Some(tour));
        }
    }
    Ok(None)
}

//! End-to-end checks through the facade's public API.

use exhaustive::prelude::*;
use exhaustive::termination::TimeTermination;
use exhaustive::{permutation_count, PruningMode, ThreadCount};
use exhaustive_test::{three_city_matrix, THREE_CITIES};

#[test]
fn test_tour_threshold_decisions() {
    let matrix = three_city_matrix();
    assert_eq!(has_tour_under(&THREE_CITIES, &matrix, 35), Ok(true));
    assert_eq!(has_tour_under(&THREE_CITIES, &matrix, 5), Ok(false));
    assert_eq!(verify_tour_cost(&matrix, &[0, 1, 2], 31), Ok(true));
    assert_eq!(verify_tour_cost(&matrix, &[0, 1, 2], 30), Ok(false));
}

#[test]
fn test_subset_sum_decisions() {
    assert_eq!(has_subset_summing_to(&[3, 34, 4, 12, 5, 2], 9), Ok(true));
    assert_eq!(has_subset_summing_to(&[3, 34, 4, 12, 5, 2], 30), Ok(false));
    assert_eq!(has_subset_summing_to(&[], 0), Ok(true));
    assert_eq!(has_subset_summing_to(&[], 5), Ok(false));
}

#[test]
fn test_permutations_feed_tour_costs() {
    let matrix = three_city_matrix();
    let costs: Vec<i64> = permutations(&THREE_CITIES)
        .map(|tour| tour_cost(&matrix, &tour).unwrap())
        .collect();
    assert_eq!(costs.len() as u128, permutation_count(3).unwrap());
    assert_eq!(costs.iter().min(), Some(&25));
    assert_eq!(costs.iter().max(), Some(&35));
}

#[test]
fn test_configured_searcher_builder() {
    let searcher = Searcher::new()
        .with_thread_count(ThreadCount::Auto)
        .with_pruning(PruningMode::Disabled)
        .with_termination(TimeTermination::seconds(3600));

    let matrix = three_city_matrix();
    assert_eq!(searcher.has_tour_under(&[2, 0, 1], &matrix, 26), Ok(true));
    assert_eq!(searcher.has_subset_summing_to(&[-4, 9, 2], 5), Ok(true));
}

#[test]
fn test_invalid_matrix_reported() {
    let err = DistanceMatrix::new(vec![vec![0, 1, 2]]).unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));
}

#[test]
fn test_guesses_and_powerset() {
    assert_eq!(num_guesses(1), Ok(26));
    assert_eq!(powerset(&['a', 'b']).len(), 4);
}

//! exhaustive - brute-force combinatorial search in Rust
//!
//! Exact, exponential-time searches over small in-memory inputs: permutation
//! enumeration, the tour threshold decision, subset sum and powersets.
//!
//! # Example
//!
//! ```rust
//! use exhaustive::prelude::*;
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0, 10, 15],
//!     vec![10, 0, 20],
//!     vec![15, 20, 0],
//! ]).unwrap();
//!
//! assert_eq!(has_tour_under(&[0, 1, 2], &matrix, 35), Ok(true));
//! assert_eq!(verify_tour_cost(&matrix, &[0, 1, 2], 30), Ok(false));
//! assert_eq!(has_subset_summing_to(&[3, 34, 4, 12, 5, 2], 9), Ok(true));
//! ```

// Core types
pub use exhaustive_core::{DistanceMatrix, Result, SearchError};

// Configuration
pub use exhaustive_config::{ConfigError, PruningMode, SearchConfig, TerminationConfig, ThreadCount};

// Searches
pub use exhaustive_search::{
    find_subset, find_tour_under, has_subset_summing_to, has_tour_under, num_guesses,
    permutation_count, permutations, powerset, tour_cost, verify_tour_cost, Permutations,
    SearchScope, Searcher,
};

pub use exhaustive_search::termination;

#[cfg(feature = "console")]
pub mod console;

mod configured;
pub use configured::{configured_searcher, DEFAULT_CONFIG_PATH};

pub mod prelude {
    pub use super::{
        find_subset, find_tour_under, has_subset_summing_to, has_tour_under, num_guesses,
        permutations, powerset, tour_cost, verify_tour_cost,
    };
    pub use super::{DistanceMatrix, SearchConfig, SearchError, Searcher};
}

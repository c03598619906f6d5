//! exhaustive Search - brute-force combinatorial search
//!
//! This crate provides:
//! - Lazy permutation generation (Heap's algorithm)
//! - Tour costing and the brute-force tour threshold decision
//! - Recursive subset-sum search
//! - Powerset enumeration and the brute-force guess count
//! - Termination conditions and a configurable [`Searcher`]
//!
//! Every search is exact and exponential in the input size; they are meant
//! for small inputs.

pub mod guesses;
pub mod permutation;
pub mod powerset;
pub mod scope;
pub mod searcher;
pub mod subset;
pub mod termination;
pub mod tour;


pub use exhaustive_core::{DistanceMatrix, Result, SearchError};
pub use guesses::num_guesses;
pub use permutation::{permutation_count, permutations, Permutations};
pub use powerset::powerset;
pub use scope::SearchScope;
pub use searcher::Searcher;
pub use subset::{find_subset, has_subset_summing_to};
pub use termination::{
    AndTermination, ExternalTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
pub use tour::{find_tour_under, has_tour_under, tour_cost, verify_tour_cost};

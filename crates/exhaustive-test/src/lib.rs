//! Shared test fixtures for the exhaustive crates.
//!
//! This crate provides small problem instances and assertion helpers.
//! It depends only on `exhaustive-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`tour`] - distance matrices and city sets
//! - [`subset`] - subset-sum instances
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! exhaustive-test = { workspace = true }
//! ```

pub mod subset;
pub mod tour;

// Re-export commonly used fixtures at crate root for convenience
pub use subset::{subset_instance, SUBSET_TARGET_ABSENT, SUBSET_TARGET_PRESENT};
pub use tour::{line_matrix, three_city_matrix, THREE_CITIES};

/// Asserts that `candidate` holds exactly the elements of `original`, each
/// with the same multiplicity.
pub fn assert_is_permutation_of<T: Ord + Clone + std::fmt::Debug>(candidate: &[T], original: &[T]) {
    let mut left = candidate.to_vec();
    let mut right = original.to_vec();
    left.sort();
    right.sort();
    assert_eq!(
        left, right,
        "{candidate:?} is not a permutation of {original:?}"
    );
}

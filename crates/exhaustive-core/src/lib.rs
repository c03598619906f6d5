//! exhaustive Core - shared types and errors for brute-force search
//!
//! This crate provides the fundamental building blocks used by the search crates:
//! - [`SearchError`] and the crate-wide [`Result`] alias
//! - [`DistanceMatrix`] for tour costing

pub mod error;
pub mod matrix;

pub use error::{Result, SearchError};
pub use matrix::DistanceMatrix;

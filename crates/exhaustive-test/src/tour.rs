//! Tour fixtures.
//!
//! # Example
//!
//! ```
//! use exhaustive_test::tour::{three_city_matrix, THREE_CITIES};
//!
//! let matrix = three_city_matrix();
//! assert_eq!(matrix.size(), THREE_CITIES.len());
//! ```

use exhaustive_core::DistanceMatrix;

/// City labels covered by [`three_city_matrix`].
pub const THREE_CITIES: [usize; 3] = [0, 1, 2];

/// Symmetric three-city matrix.
///
/// Open tours cost 25 (`1→0→2`, `2→0→1`), 30 (`0→1→2`, `2→1→0`) or
/// 35 (`0→2→1`, `1→2→0`).
pub fn three_city_matrix() -> DistanceMatrix {
    DistanceMatrix::new(vec![vec![0, 10, 15], vec![10, 0, 20], vec![15, 20, 0]])
        .expect("fixture matrix is square and non-negative")
}

/// Cities placed on a line at positions `0..n`; travel costs `|i - j|`.
///
/// The cheapest open tour walks the line end to end and costs `n - 1`.
pub fn line_matrix(n: usize) -> DistanceMatrix {
    let rows = (0..n)
        .map(|i| (0..n).map(|j| (i as i64 - j as i64).abs()).collect())
        .collect();
    DistanceMatrix::new(rows).expect("line matrix is square and non-negative")
}

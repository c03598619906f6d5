//! Square distance matrix between cities.

use crate::error::{Result, SearchError};

/// An N×N table of non-negative travel costs.
///
/// `cost(i, j)` is the cost of travelling from city `i` to city `j`. The
/// matrix is not assumed to be symmetric.
///
/// # Example
///
/// ```
/// use exhaustive_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).unwrap();
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(1, 2), Some(20));
/// assert_eq!(matrix.get(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistanceMatrix {
    size: usize,
    // Row-major, size * size entries.
    costs: Vec<i64>,
}

impl DistanceMatrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] if the rows do not form a square
    /// table or if any cost is negative.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let size = rows.len();
        let mut costs = Vec::with_capacity(size * size);

        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SearchError::invalid_input(format!(
                    "distance matrix row {from} has {} entries, expected {size}",
                    row.len()
                )));
            }
            if let Some(to) = row.iter().position(|&cost| cost < 0) {
                return Err(SearchError::invalid_input(format!(
                    "distance from city {from} to city {to} is negative ({})",
                    row[to]
                )));
            }
            costs.extend(row);
        }

        Ok(Self { size, costs })
    }

    /// Number of cities covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if `city` is a valid index into the matrix.
    #[inline]
    pub fn contains_city(&self, city: usize) -> bool {
        city < self.size
    }

    /// Cost of travelling from `from` to `to`, or `None` if either index is
    /// out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        if from < self.size && to < self.size {
            Some(self.costs[from * self.size + to])
        } else {
            None
        }
    }

    /// Returns the first city index in `cities` the matrix does not cover.
    pub fn first_unknown_city(&self, cities: &[usize]) -> Option<usize> {
        cities.iter().copied().find(|&city| !self.contains_city(city))
    }
}

impl TryFrom<Vec<Vec<i64>>> for DistanceMatrix {
    type Error = SearchError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(rows)
    }
}

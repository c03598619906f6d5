//! Lazy permutation generation with Heap's algorithm.
//!
//! [`Permutations`] walks the swap pattern of the recursive Heap variant
//! without recursing: one counter per level replaces the call stack, and a
//! single scratch buffer is mutated in place. Every yielded permutation is a
//! fresh copy of that buffer, so callers may keep them freely.
//!
//! Enumeration costs O(N!) and is only practical for small inputs
//! (N = 12 is already ~479 million permutations).

use std::iter::FusedIterator;

/// Returns a lazy iterator over all permutations of `items`.
///
/// The first permutation is `items` itself. An empty input yields exactly one
/// empty permutation, matching `0! = 1`.
///
/// # Example
///
/// ```
/// use exhaustive_search::permutations;
///
/// let all: Vec<Vec<u8>> = permutations(&[0, 1, 2]).collect();
/// assert_eq!(all, vec![
///     vec![0, 1, 2],
///     vec![1, 0, 2],
///     vec![2, 1, 0],
///     vec![1, 2, 0],
///     vec![2, 0, 1],
///     vec![0, 2, 1],
/// ]);
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations::new(items.to_vec())
}

/// Number of permutations of `n` distinct elements, or `None` if `n!`
/// does not fit in a `u128`.
pub fn permutation_count(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Iterator over the permutations of an owned sequence.
///
/// Level `k` (for `k` in `2..=n`) loops `i` over `0..k`: it lets level `k - 1`
/// run to completion, then swaps `(k - 1, i)` when `k` is odd or `(0, k - 1)`
/// when `k` is even.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    buffer: Vec<T>,
    // counters[k] is the loop index of level k; indices 0 and 1 are unused.
    counters: Vec<usize>,
    started: bool,
    done: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Permutations<T> {
    /// Creates an iterator that takes ownership of the working buffer.
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        let remaining = permutation_count(n).and_then(|count| usize::try_from(count).ok());
        Self {
            buffer: items,
            counters: vec![0; n + 1],
            started: false,
            done: false,
            remaining,
        }
    }

    /// Advances the scratch buffer to the next permutation.
    ///
    /// Returns false once every level has finished its loop.
    fn advance(&mut self) -> bool {
        let n = self.buffer.len();
        let mut level = 2;
        loop {
            if level > n {
                return false;
            }
            let i = self.counters[level];
            if level % 2 == 1 {
                self.buffer.swap(level - 1, i);
            } else {
                self.buffer.swap(0, level - 1);
            }
            if i + 1 < level {
                // Levels below are reset to zero, so descending reaches a leaf.
                self.counters[level] = i + 1;
                return true;
            }
            self.counters[level] = 0;
            level += 1;
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(self.buffer.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

#[cfg(test)]
mod tests;

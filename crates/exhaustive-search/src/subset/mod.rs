//! Exclusion-first subset-sum search.
//!
//! Elements are considered from the last index backward. At each element the
//! search first tries leaving it out and only then tries taking it. With no
//! memoization the worst case is O(2^N) calls. Pending calls live on a heap
//! allocated frame stack, N + 1 frames deep at most.

use exhaustive_core::{Result, SearchError};

use crate::scope::SearchScope;
use crate::searcher::Searcher;

/// Returns true if some selection of `nums`, each index used at most once,
/// sums to `target`.
///
/// The empty selection sums to zero, so a zero target always succeeds.
///
/// # Example
///
/// ```
/// use exhaustive_search::has_subset_summing_to;
///
/// assert_eq!(has_subset_summing_to(&[3, 34, 4, 12, 5, 2], 9), Ok(true));
/// assert_eq!(has_subset_summing_to(&[3, 34, 4, 12, 5, 2], 30), Ok(false));
/// assert_eq!(has_subset_summing_to(&[], 0), Ok(true));
/// ```
pub fn has_subset_summing_to(nums: &[i64], target: i64) -> Result<bool> {
    Searcher::new().has_subset_summing_to(nums, target)
}

/// Returns the ascending indices of the first subset found to sum to
/// `target`, if any.
pub fn find_subset(nums: &[i64], target: i64) -> Result<Option<Vec<usize>>> {
    Searcher::new().find_subset(nums, target)
}

/// Search state shared by every frame.
struct SubsetSearch<'a, 't> {
    searcher: &'a Searcher<'t>,
    scope: &'a SearchScope,
    nums: &'a [i64],
    prune: bool,
    // Indices taken on the current branch, highest first.
    chosen: Vec<usize>,
}

/// Progress of one pending `(remaining, len)` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Enter,
    Excluded,
    Included,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    remaining: i64,
    len: usize,
    step: Step,
}

impl Frame {
    fn enter(remaining: i64, len: usize) -> Self {
        Self {
            remaining,
            len,
            step: Step::Enter,
        }
    }
}

pub(crate) fn search(
    searcher: &Searcher<'_>,
    nums: &[i64],
    target: i64,
    prune: bool,
    scope: &SearchScope,
) -> Result<Option<Vec<usize>>> {
    let mut search = SubsetSearch {
        searcher,
        scope,
        nums,
        prune,
        chosen: Vec::new(),
    };
    if search.explore(target)? {
        let mut chosen = search.chosen;
        chosen.reverse();
        Ok(Some(chosen))
    } else {
        Ok(None)
    }
}

impl SubsetSearch<'_, '_> {
    /// Tries to reach `target` using any of the elements.
    ///
    /// Runs the exclusion-first recursion on an explicit frame stack so that
    /// depth is bounded by heap memory rather than the thread stack.
    fn explore(&mut self, target: i64) -> Result<bool> {
        let mut stack = vec![Frame::enter(target, self.nums.len())];
        // Outcome of the most recently finished frame.
        let mut found = false;

        while let Some(top) = stack.last_mut() {
            let Frame { remaining, len, step } = *top;
            match step {
                Step::Enter => {
                    self.searcher.enter_node(self.scope)?;

                    if remaining == 0 {
                        found = true;
                        stack.pop();
                        continue;
                    }
                    let Some(index) = len.checked_sub(1) else {
                        found = false;
                        stack.pop();
                        continue;
                    };
                    let value = self.nums[index];

                    // Only sound when every element is non-negative.
                    if self.prune {
                        if remaining < 0 {
                            found = false;
                            stack.pop();
                            continue;
                        }
                        if value > remaining {
                            // Tail position: reuse the frame for the exclusion call.
                            top.len = index;
                            continue;
                        }
                    }

                    top.step = Step::Excluded;
                    stack.push(Frame::enter(remaining, index));
                }
                Step::Excluded => {
                    if found {
                        stack.pop();
                        continue;
                    }
                    let index = len - 1;
                    let value = self.nums[index];
                    let rest = remaining.checked_sub(value).ok_or_else(|| {
                        SearchError::invalid_input(format!("{remaining} - {value} overflows i64"))
                    })?;
                    self.chosen.push(index);
                    top.step = Step::Included;
                    stack.push(Frame::enter(rest, index));
                }
                Step::Included => {
                    if !found {
                        self.chosen.pop();
                    }
                    stack.pop();
                }
            }
        }
        Ok(found)
    }
}

//! Subset-sum fixtures.

/// A target reachable from [`subset_instance`] (`4 + 5`).
pub const SUBSET_TARGET_PRESENT: i64 = 9;

/// A target no subset of [`subset_instance`] reaches.
pub const SUBSET_TARGET_ABSENT: i64 = 30;

/// The classic six-element instance `[3, 34, 4, 12, 5, 2]`.
pub fn subset_instance() -> Vec<i64> {
    vec![3, 34, 4, 12, 5, 2]
}

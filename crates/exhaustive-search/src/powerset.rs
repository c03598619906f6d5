//! Powerset enumeration.

/// Returns all `2^N` subsets of `items`.
///
/// Built from the powerset of the tail: each tail subset appears first with
/// the head element prepended, then without it. Materializes every subset,
/// so memory grows as O(N·2^N).
///
/// # Example
///
/// ```
/// use exhaustive_search::powerset;
///
/// assert_eq!(powerset(&[1, 2]), vec![vec![1, 2], vec![2], vec![1], vec![]]);
/// ```
pub fn powerset<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let Some((head, tail)) = items.split_first() else {
        return vec![Vec::new()];
    };

    let subsets = powerset(tail);
    let mut all = Vec::with_capacity(subsets.len() * 2);
    for subset in subsets {
        let mut with_head = Vec::with_capacity(subset.len() + 1);
        with_head.push(head.clone());
        with_head.extend_from_slice(&subset);
        all.push(with_head);
        all.push(subset);
    }
    all
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_empty_set() {
        assert_eq!(powerset::<i32>(&[]), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_order() {
        assert_eq!(
            powerset(&[1, 2, 3]),
            vec![
                vec![1, 2, 3],
                vec![2, 3],
                vec![1, 3],
                vec![3],
                vec![1, 2],
                vec![2],
                vec![1],
                vec![],
            ]
        );
    }

    #[test]
    fn test_size_and_distinctness() {
        let items: Vec<u32> = (0..10).collect();
        let all = powerset(&items);
        assert_eq!(all.len(), 1 << 10);

        let distinct: HashSet<&Vec<u32>> = all.iter().collect();
        assert_eq!(distinct.len(), all.len());
    }
}

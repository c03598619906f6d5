//! Tests for permutation generation.

use std::collections::HashSet;

use exhaustive_test::assert_is_permutation_of;

use super::*;

#[test]
fn test_counts_and_distinctness_up_to_eight() {
    for n in 0..=8usize {
        let input: Vec<usize> = (0..n).collect();
        let all: Vec<Vec<usize>> = permutations(&input).collect();

        assert_eq!(all.len() as u128, permutation_count(n).unwrap(), "n = {n}");
        let distinct: HashSet<&Vec<usize>> = all.iter().collect();
        assert_eq!(distinct.len(), all.len(), "duplicates for n = {n}");
        for perm in &all {
            assert_is_permutation_of(perm, &input);
        }
    }
}

#[test]
fn test_empty_input_yields_one_empty_permutation() {
    let all: Vec<Vec<i32>> = permutations(&[]).collect();
    assert_eq!(all, vec![Vec::<i32>::new()]);
}

#[test]
fn test_single_element() {
    let all: Vec<Vec<char>> = permutations(&['a']).collect();
    assert_eq!(all, vec![vec!['a']]);
}

#[test]
fn test_first_permutation_is_input_order() {
    let input = vec![7, 3, 9, 1];
    assert_eq!(permutations(&input).next(), Some(input));
}

#[test]
fn test_heap_swap_order_for_four() {
    let first: Vec<Vec<u8>> = permutations(&[0, 1, 2, 3]).take(8).collect();
    assert_eq!(
        first,
        vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 2, 3],
            vec![2, 1, 0, 3],
            vec![1, 2, 0, 3],
            vec![2, 0, 1, 3],
            vec![0, 2, 1, 3],
            vec![3, 0, 1, 2],
            vec![0, 3, 1, 2],
        ]
    );
}

/// Recursive Heap's algorithm with the same swap pattern.
fn heap_reference(buffer: &mut [usize], n: usize, out: &mut Vec<Vec<usize>>) {
    if n <= 1 {
        out.push(buffer.to_vec());
        return;
    }
    for i in 0..n {
        heap_reference(buffer, n - 1, out);
        if n % 2 == 1 {
            buffer.swap(n - 1, i);
        } else {
            buffer.swap(0, n - 1);
        }
    }
}

#[test]
fn test_full_order_matches_recursive_heap() {
    for n in 1..=7usize {
        let input: Vec<usize> = (0..n).collect();
        let mut expected = Vec::new();
        heap_reference(&mut input.clone(), n, &mut expected);

        let actual: Vec<Vec<usize>> = permutations(&input).collect();
        assert_eq!(actual, expected, "n = {n}");
    }
}

#[test]
fn test_yielded_values_do_not_alias_buffer() {
    let mut iter = permutations(&[1, 2, 3]);
    let first = iter.next().unwrap();
    let rest: Vec<Vec<i32>> = iter.collect();

    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(rest.len(), 5);
    assert!(!rest.contains(&first));
}

#[test]
fn test_size_hint_counts_down() {
    let mut iter = permutations(&[1, 2, 3]);
    assert_eq!(iter.size_hint(), (6, Some(6)));
    iter.next();
    assert_eq!(iter.size_hint(), (5, Some(5)));
    let rest = iter.by_ref().count();
    assert_eq!(rest, 5);
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_restartable() {
    let input = vec![4, 5, 6, 7];
    let a: Vec<Vec<i32>> = permutations(&input).collect();
    let b: Vec<Vec<i32>> = permutations(&input.clone()).collect();
    assert_eq!(a, b);
}

#[test]
fn test_permutation_count() {
    assert_eq!(permutation_count(0), Some(1));
    assert_eq!(permutation_count(1), Some(1));
    assert_eq!(permutation_count(5), Some(120));
    assert_eq!(permutation_count(20), Some(2_432_902_008_176_640_000));
    assert!(permutation_count(34).is_some());
    assert_eq!(permutation_count(35), None);
}

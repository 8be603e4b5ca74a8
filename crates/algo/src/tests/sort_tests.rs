// Sort & Search Tests
//
// Every sort is checked in both directions for the permutation property and
// the adjacent-pair order relation.

use crate::sort::{
    binary_search, bubble_sort, find_max, find_min, insertion_sort, is_sorted, linear_search,
    merge_sort, reverse, selection_sort, CAPACITY, IntArray, Order,
};

type SortFn = fn(&mut [i64], Order);

const SORTS: [(&str, SortFn); 4] = [
    ("bubble", bubble_sort),
    ("insertion", insertion_sort),
    ("selection", selection_sort),
    ("merge", merge_sort),
];

fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[test]
fn test_all_sorts_both_directions() {
    let input = vec![5, -3, 8, 0, 8, 1, -3, 42, 7];
    for (name, sort) in SORTS {
        for order in [Order::Ascending, Order::Descending] {
            let mut arr = input.clone();
            sort(&mut arr, order);
            assert!(
                is_permutation(&input, &arr),
                "{} {:?}: not a permutation: {:?}",
                name,
                order,
                arr
            );
            assert!(
                is_sorted(&arr, order),
                "{} {:?}: order violated: {:?}",
                name,
                order,
                arr
            );
        }
    }
}

#[test]
fn test_sorts_on_trivial_inputs() {
    for (_, sort) in SORTS {
        let mut empty: Vec<i64> = vec![];
        sort(&mut empty, Order::Ascending);
        assert!(empty.is_empty());

        let mut single = vec![9];
        sort(&mut single, Order::Descending);
        assert_eq!(single, vec![9]);
    }
}

#[test]
fn test_sorts_on_already_sorted_input() {
    for (_, sort) in SORTS {
        let mut arr = vec![1, 2, 3, 4, 5];
        sort(&mut arr, Order::Ascending);
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
        sort(&mut arr, Order::Descending);
        assert_eq!(arr, vec![5, 4, 3, 2, 1]);
    }
}

#[test]
fn test_merge_sort_ascending_example() {
    let mut arr = vec![5, 3, 3, 1];
    merge_sort(&mut arr, Order::Ascending);
    assert_eq!(arr, vec![1, 3, 3, 5]);
}

#[test]
fn test_merge_keeps_left_run_on_ties() {
    // Merging [3a] and [3b] must emit the left run first in both directions.
    // Values are indistinguishable, so probe the tie-break helper through a
    // merge whose halves are already sorted: [1,3] / [3,5].
    let mut arr = vec![3, 1, 5, 3];
    merge_sort(&mut arr, Order::Ascending);
    assert_eq!(arr, vec![1, 3, 3, 5]);
    let mut arr = vec![3, 1, 5, 3];
    merge_sort(&mut arr, Order::Descending);
    assert_eq!(arr, vec![5, 3, 3, 1]);
}

#[test]
fn test_binary_search_hits_and_misses() {
    let arr = [1, 3, 5, 7, 9];
    assert_eq!(binary_search(&arr, 5), Some(2));
    assert_eq!(binary_search(&arr, 1), Some(0));
    assert_eq!(binary_search(&arr, 9), Some(4));
    assert_eq!(binary_search(&arr, 4), None);
    assert_eq!(binary_search(&arr, -2), None);
    assert_eq!(binary_search(&arr, 100), None);
}

#[test]
fn test_binary_search_empty() {
    assert_eq!(binary_search(&[], 1), None);
}

#[test]
fn test_linear_search() {
    let arr = [4, 2, 7, 2];
    assert_eq!(linear_search(&arr, 7), Some(2));
    assert_eq!(linear_search(&arr, 2), Some(1)); // first match
    assert_eq!(linear_search(&arr, 9), None);
}

#[test]
fn test_reverse() {
    let mut arr = vec![1, 2, 3, 4];
    reverse(&mut arr);
    assert_eq!(arr, vec![4, 3, 2, 1]);

    let mut odd = vec![1, 2, 3];
    reverse(&mut odd);
    assert_eq!(odd, vec![3, 2, 1]);
}

#[test]
fn test_find_min_max() {
    let arr = [5, -1, 9, -1, 9];
    assert_eq!(find_min(&arr), Some(-1));
    assert_eq!(find_max(&arr), Some(9));
    assert_eq!(find_min(&[]), None);
    assert_eq!(find_max(&[]), None);
}

#[test]
fn test_is_sorted_classification() {
    assert!(is_sorted(&[1, 2, 2, 3], Order::Ascending));
    assert!(is_sorted(&[3, 2, 2, 1], Order::Descending));
    assert!(!is_sorted(&[1, 3, 2], Order::Ascending));
    assert!(!is_sorted(&[1, 3, 2], Order::Descending));
    // Flat arrays count as sorted both ways
    assert!(is_sorted(&[7, 7, 7], Order::Ascending));
    assert!(is_sorted(&[7, 7, 7], Order::Descending));
    // Trivial cases
    assert!(is_sorted(&[], Order::Ascending));
    assert!(is_sorted(&[1], Order::Descending));
}

#[test]
fn test_int_array_capacity() {
    assert!(IntArray::from_vec(vec![0; CAPACITY]).is_ok());
    let err = IntArray::from_vec(vec![0; CAPACITY + 1]).unwrap_err();
    assert_eq!(err.len, CAPACITY + 1);
}

#[test]
fn test_int_array_slices() {
    let mut arr = IntArray::from_vec(vec![3, 1, 2]).unwrap();
    bubble_sort(arr.as_mut_slice(), Order::Ascending);
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(arr.len(), 3);
    assert!(!arr.is_empty());
}

// Textbook sorts and searches over integer slices.
//
// Every sort works in place. Binary search assumes ascending order; the REPL
// repairs that precondition (visibly) before calling it.

use std::fmt;

/// Capacity of the sort/search menu's backing array
pub const CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// True when an adjacent pair (a before b) violates this order
    fn out_of_place(self, a: i64, b: i64) -> bool {
        match self {
            Order::Ascending => a > b,
            Order::Descending => a < b,
        }
    }

    /// Merge tie-break: the left run wins on equal keys, keeping merge sort
    /// stable in both directions.
    fn keeps_left(self, a: i64, b: i64) -> bool {
        match self {
            Order::Ascending => a <= b,
            Order::Descending => a >= b,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityError {
    pub len: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elements exceed the capacity of {}", self.len, CAPACITY)
    }
}

impl std::error::Error for CapacityError {}

/// The bounded backing store of the sort/search menus. Capacity is part of
/// the design, so exceeding it is an observable rejection, not a
/// reallocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntArray {
    values: Vec<i64>,
}

impl IntArray {
    pub fn from_vec(values: Vec<i64>) -> Result<IntArray, CapacityError> {
        if values.len() > CAPACITY {
            return Err(CapacityError { len: values.len() });
        }
        Ok(IntArray { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.values
    }
}

/// Adjacent-swap sort, O(n^2).
pub fn bubble_sort(arr: &mut [i64], order: Order) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if order.out_of_place(arr[j], arr[j + 1]) {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Shift-and-insert sort, O(n^2).
pub fn insertion_sort(arr: &mut [i64], order: Order) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && order.out_of_place(arr[j - 1], key) {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}

/// Find-extremum-then-swap sort, O(n^2).
pub fn selection_sort(arr: &mut [i64], order: Order) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut idx = i;
        for j in i + 1..n {
            if order.out_of_place(arr[idx], arr[j]) {
                idx = j;
            }
        }
        if idx != i {
            arr.swap(i, idx);
        }
    }
}

/// Recursive merge sort; stable (left run wins ties).
pub fn merge_sort(arr: &mut [i64], order: Order) {
    let n = arr.len();
    if n > 1 {
        sort_range(arr, 0, n - 1, order);
    }
}

fn sort_range(arr: &mut [i64], l: usize, r: usize, order: Order) {
    if l < r {
        let m = (l + r) / 2;
        sort_range(arr, l, m, order);
        sort_range(arr, m + 1, r, order);
        merge(arr, l, m, r, order);
    }
}

fn merge(arr: &mut [i64], l: usize, m: usize, r: usize, order: Order) {
    let left = arr[l..=m].to_vec();
    let right = arr[m + 1..=r].to_vec();

    let (mut i, mut j, mut k) = (0, 0, l);
    while i < left.len() && j < right.len() {
        if order.keeps_left(left[i], right[j]) {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// Binary search over an ascending slice. Callers sort first.
pub fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let mut low = 0;
    let mut high = arr.len();
    while low < high {
        let mid = (low + high) / 2;
        if arr[mid] == target {
            return Some(mid);
        } else if arr[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}

/// Forward scan; no precondition.
pub fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    arr.iter().position(|&v| v == target)
}

pub fn reverse(arr: &mut [i64]) {
    arr.reverse();
}

/// First minimal value seen by a forward scan.
pub fn find_min(arr: &[i64]) -> Option<i64> {
    arr.iter().copied().min()
}

/// First maximal value seen by a forward scan.
pub fn find_max(arr: &[i64]) -> Option<i64> {
    arr.iter().copied().max()
}

/// Full adjacent-pair check for one direction; false on the first violation.
pub fn is_sorted(arr: &[i64], order: Order) -> bool {
    arr.windows(2).all(|pair| !order.out_of_place(pair[0], pair[1]))
}

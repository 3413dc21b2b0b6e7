//! Hybrid quicksort
//!
//! Middle-element pivot, two-cursor partition, insertion sort below
//! `INSERTION_THRESHOLD`. Only the smaller partition is sorted recursively;
//! the larger one is handled by the enclosing loop, which keeps the stack
//! depth logarithmic.
//!
//! Not stable: partitioning swaps elements across equal keys.

use crate::index::Position;

/// Ranges shorter than this are finished with insertion sort
pub const INSERTION_THRESHOLD: usize = 16;

/// Sort `v` in place so that no element is `is_less` than its predecessor
pub fn quick_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_range(v, &mut is_less);
}

/// Sort a permutation of positions into `data` without touching `data`
///
/// Afterwards `data[order[i]]` is never `is_less` than `data[order[i - 1]]`.
///
/// # Panics
/// If `order` holds a position outside `data`.
pub fn quick_sort_indices_by<T, F>(order: &mut [Position], data: &[T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_range(order, &mut |a: &Position, b: &Position| is_less(&data[*a], &data[*b]));
}

/// Plain insertion sort; strict comparison keeps it stable and makes it a
/// no-op on sorted input
pub fn insertion_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort(v, &mut is_less);
}

fn sort_range<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < INSERTION_THRESHOLD {
            insertion_sort(v, is_less);
            return;
        }

        let mid = partition(v, is_less);
        let (left, right) = v.split_at_mut(mid);

        if left.len() < right.len() {
            sort_range(left, is_less);
            v = right;
        } else {
            sort_range(right, is_less);
            v = left;
        }
    }
}

/// Partition around the middle element and return the split point
///
/// Every element of `v[..split]` is not greater than the pivot and every
/// element of `v[split..]` is not less than it. For `v.len() >= 2` both
/// halves are non-empty.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    // The pivot stays an element of `v`; track where swaps move it.
    let mut pivot = v.len() / 2;
    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        while is_less(&v[i], &v[pivot]) {
            i += 1;
        }
        while is_less(&v[pivot], &v[j]) {
            j -= 1;
        }

        if i > j {
            return i;
        }

        v.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        // j == 0 only when i == j == 0, which cannot occur past the first swap.
        if j == 0 || i > j - 1 {
            return i;
        }
        j -= 1;
    }
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

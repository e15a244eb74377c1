//! In-place quicksort used to order Kruskal's candidate edges.
//!
//! Lomuto partition around the last element. The sort is not stable: elements that
//! compare equal may end up in any relative order. The smaller partition is sorted
//! recursively and the larger one iteratively, which keeps the recursion depth
//! logarithmic even on adversarial (already sorted) input; the running time on such
//! input is still quadratic.

use core::cmp::Ordering;

/// Sorts `slice` in ascending order according to `compare`.
pub fn quicksort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(slice, &mut compare);
}

fn sort_range<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let pivot = partition(slice, compare);
        let (left, rest) = core::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_range(left, compare);
            slice = right;
        } else {
            sort_range(right, compare);
            slice = left;
        }
    }
}

// Returns the final index of the pivot (the former last element).
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = slice.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if compare(&slice[i], &slice[last]) == Ordering::Less {
            slice.swap(i, store);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}

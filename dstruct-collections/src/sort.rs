//! In-place partition quicksort.
//!
//! The algorithm is fixed rather than "whatever is fastest": given the same
//! input order and comparator it performs the same comparisons, in the same
//! order, and produces the same arrangement of equal elements. Callers that
//! count comparator calls or depend on tie placement can rely on that.
//!
//! For a range of `n` elements:
//!
//! ```text
//! 1. n <= 1                  -> done
//! 2. swap v[n/2] into v[0]   -> pivot
//! 3. j = 1
//!    for i in 1..n:
//!        if compare(v[i], pivot) != Greater { swap(v[i], v[j]); j += 1 }
//! 4. swap(v[0], v[j-1])      -> pivot lands at j-1
//! 5. recurse on v[..j-1] and v[j-1..]
//! ```
//!
//! The right recursion starts at the pivot's final cell, so the pivot takes
//! part in the next partition of that range. Elements equal to the pivot
//! are grouped on the left side. The sort is not stable.
//!
//! Ranges still to be partitioned are kept on an explicit work stack, left
//! range on top, so they are visited in the same order as the recursive
//! description above. Runs of equal keys shrink the range by one element per
//! pass: that is quadratic in time but never deepens the call stack.

use core::cmp::Ordering;

/// Sorts `v` in place with the partition scheme described in the module docs.
///
/// # Example
///
/// ```
/// use dstruct_collections::quick_sort_by;
///
/// let mut v = [5, 3, 9, 1];
/// quick_sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [9, 5, 3, 1]);
/// ```
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!(len = v.len(), "quick_sort_by");
    partition_sort(v, &mut compare);
}

/// Sorts `v` in place by `T`'s natural order.
///
/// Equivalent to `quick_sort_by(v, Ord::cmp)`.
#[inline]
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

fn partition_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // (start, len) of ranges longer than one element.
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if v.len() > 1 {
        pending.push((0, v.len()));
    }

    while let Some((start, n)) = pending.pop() {
        let range = &mut v[start..start + n];
        range.swap(0, n / 2);

        let mut j = 1;
        for i in 1..n {
            if compare(&range[i], &range[0]) != Ordering::Greater {
                range.swap(i, j);
                j += 1;
            }
        }

        range.swap(0, j - 1);

        // Right first so the left range is popped, and finished, before it.
        if n - j + 1 > 1 {
            pending.push((start + j - 1, n - j + 1));
        }
        if j - 1 > 1 {
            pending.push((start, j - 1));
        }
    }
}

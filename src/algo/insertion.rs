//! Insertion sorts over permutation buffers.
//!
//! - [`binary_insertion_sort`]: run detection followed by binary insertion. Stable.
//! - [`insertion_sort`]: plain shifting insertion sort, used for the fixed-size
//!   runs of the merge sort. Stable.

use crate::core::IndexComparator;
use std::cmp::Ordering;

/// Sorts `proxy` with binary insertion sort.
///
/// The longest weakly ascending or strictly descending run at the start of
/// the buffer is detected first (descending runs are reversed in place), the
/// remaining indices are then binary-inserted into the growing sorted prefix.
///
/// O(n log n) comparisons, O(n²) index moves in the worst case.
pub fn binary_insertion_sort<H, C>(handle: &H, proxy: &mut [usize], comparator: &C)
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    if proxy.len() < 2 {
        return;
    }

    let run = count_run_and_make_ascending(handle, proxy, comparator);
    binary_insert_from(handle, proxy, run, comparator);
}

/// Binary-inserts `proxy[start..]` into the sorted prefix `proxy[..start]`.
///
/// The insertion point is the upper bound of the pivot, so equal elements
/// keep their relative order.
pub fn binary_insert_from<H, C>(handle: &H, proxy: &mut [usize], start: usize, comparator: &C)
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    debug_assert!(start <= proxy.len());

    for i in start.max(1)..proxy.len() {
        let pivot = proxy[i];
        let pos = proxy[..i]
            .partition_point(|&p| comparator.compare(handle, pivot, p) != Ordering::Less);

        proxy.copy_within(pos..i, pos + 1);
        proxy[pos] = pivot;
    }
}

/// Returns the length of the run at the start of `proxy`, reversing it first
/// if it is strictly descending.
///
/// Descending runs must be strict, otherwise reversing would swap equal
/// elements.
pub(crate) fn count_run_and_make_ascending<H, C>(
    handle: &H,
    proxy: &mut [usize],
    comparator: &C,
) -> usize
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    let len = proxy.len();
    if len < 2 {
        return len;
    }

    let mut end = 2;
    if comparator.compare(handle, proxy[1], proxy[0]) == Ordering::Less {
        while end < len && comparator.compare(handle, proxy[end], proxy[end - 1]) == Ordering::Less
        {
            end += 1;
        }
        proxy[..end].reverse();
    } else {
        while end < len && comparator.compare(handle, proxy[end], proxy[end - 1]) != Ordering::Less
        {
            end += 1;
        }
    }

    end
}

/// Sorts `proxy` with a plain shifting insertion sort.
pub fn insertion_sort<H, C>(handle: &H, proxy: &mut [usize], comparator: &C)
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    for i in 1..proxy.len() {
        let pivot = proxy[i];
        let mut j = i;
        while j > 0 && comparator.compare(handle, proxy[j - 1], pivot) == Ordering::Greater {
            proxy[j] = proxy[j - 1];
            j -= 1;
        }
        proxy[j] = pivot;
    }
}

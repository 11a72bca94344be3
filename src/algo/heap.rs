//! Heap selection sort over permutation buffers.

use crate::core::IndexComparator;
use std::cmp::Ordering;

/// Sorts `proxy` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case
/// comparisons regardless of the input order.
///
/// Not stable: equal elements may come out in any relative order.
pub fn heap_sort<H, C>(handle: &H, proxy: &mut [usize], comparator: &C)
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    let len = proxy.len();

    // Heapify.
    for node in (0..len / 2).rev() {
        sink(handle, proxy, node, len, comparator);
    }

    // Sort down.
    for end in (1..len).rev() {
        proxy.swap(0, end);
        sink(handle, proxy, 0, end, comparator);
    }
}

// This binary heap respects the invariant `parent >= child` on `proxy[..end]`.
fn sink<H, C>(handle: &H, proxy: &mut [usize], mut node: usize, end: usize, comparator: &C)
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }

        // Choose the greater child.
        if child + 1 < end
            && comparator.compare(handle, proxy[child], proxy[child + 1]) == Ordering::Less
        {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if comparator.compare(handle, proxy[node], proxy[child]) != Ordering::Less {
            break;
        }

        proxy.swap(node, child);
        node = child;
    }
}

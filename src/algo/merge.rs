//! Run-chunked bottom-up merge sort, the general purpose engine.
//!
//! 1. The buffer is cut into consecutive runs of [`RUN`] indices (the last
//!    one may be shorter), each sorted with a plain insertion sort.
//! 2. Adjacent blocks are merged with doubling block size until one block
//!    covers the whole buffer.
//!
//! Ties always resolve in favour of the left block, which makes the sort stable.

use super::insertion::insertion_sort;
use crate::core::IndexComparator;
use std::cmp::Ordering;

/// Length of the chunks sorted by insertion sort before merging starts.
pub const RUN: usize = 32;

/// Scratch copies of the two blocks being merged.
///
/// Reused across merges of one sort call and dropped on return.
#[derive(Default)]
struct MergeScratch {
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Sorts `proxy` with the run-merge algorithm.
///
/// *O*(*n* \* log(*n*)) comparisons in the average and worst case, stable.
pub fn run_merge_sort<H, C>(handle: &H, proxy: &mut [usize], comparator: &C)
where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    let len = proxy.len();
    if len < 2 {
        return;
    }

    proxy
        .chunks_mut(RUN)
        .for_each(|run| insertion_sort(handle, run, comparator));

    let mut scratch = MergeScratch::default();
    let mut size = RUN;
    while size < len {
        let mut left = 0;
        // Only pairs with a non-empty right block need merging.
        while left + size < len {
            let right = len.min(left + 2 * size);
            merge(handle, &mut proxy[left..right], size, comparator, &mut scratch);
            left += 2 * size;
        }
        size *= 2;
    }
}

/// Merges the sorted blocks `block[..mid]` and `block[mid..]`.
fn merge<H, C>(
    handle: &H,
    block: &mut [usize],
    mid: usize,
    comparator: &C,
    scratch: &mut MergeScratch,
) where
    H: ?Sized,
    C: IndexComparator<H> + ?Sized,
{
    // Blocks already in order.
    if comparator.compare(handle, block[mid - 1], block[mid]) != Ordering::Greater {
        return;
    }

    let MergeScratch { left, right } = scratch;
    left.clear();
    left.extend_from_slice(&block[..mid]);
    right.clear();
    right.extend_from_slice(&block[mid..]);

    let (mut i, mut j, mut out) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if comparator.compare(handle, left[i], right[j]) != Ordering::Greater {
            block[out] = left[i];
            i += 1;
        } else {
            block[out] = right[j];
            j += 1;
        }
        out += 1;
    }

    // At most one of these is non-empty.
    let rest = if i < left.len() {
        &left[i..]
    } else {
        &right[j..]
    };
    block[out..].copy_from_slice(rest);
}

//! Sorting algorithms operating on permutation buffers.
//!
//! This module contains three strategies, all of which only reorder the
//! buffer of indices and never touch the handle:
//! - **Binary insertion sort** with run detection: stable, best for small inputs.
//! - **Heap sort**: unstable, guaranteed *O*(*n* \* log(*n*)) comparisons.
//! - **Run-merge sort**: stable bottom-up merge of insertion-sorted runs; the
//!   default engine behind [`crate::sort`].
//!
//! [`Algorithm`] names the strategies so callers can pick one explicitly.

pub mod heap;
pub mod insertion;
pub mod merge;

use crate::core::IndexComparator;
use std::fmt;

pub use heap::heap_sort;
pub use insertion::{binary_insertion_sort, insertion_sort};
pub use merge::run_merge_sort;

/// The available sorting strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BinaryInsertion,
    Heap,
    RunMerge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BinaryInsertion,
        Algorithm::Heap,
        Algorithm::RunMerge,
    ];

    /// Size based choice between binary insertion and heap sort: inputs
    /// shorter than `threshold` use binary insertion.
    pub fn select(len: usize, threshold: usize) -> Self {
        if len < threshold {
            Algorithm::BinaryInsertion
        } else {
            Algorithm::Heap
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, Algorithm::Heap)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BinaryInsertion => "binary_insertion_sort",
            Algorithm::Heap => "heap_sort",
            Algorithm::RunMerge => "run_merge_sort",
        }
    }

    /// Sorts `proxy` in place with this strategy.
    ///
    /// `proxy` may hold any indices valid for `handle`; sub-range sorts pass
    /// a buffer initialised to `from..to`.
    pub fn sort<H, C>(self, handle: &H, proxy: &mut [usize], comparator: &C)
    where
        H: ?Sized,
        C: IndexComparator<H> + ?Sized,
    {
        log::trace!("{}: sorting {} indexes", self, proxy.len());

        match self {
            Algorithm::BinaryInsertion => binary_insertion_sort(handle, proxy, comparator),
            Algorithm::Heap => heap_sort(handle, proxy, comparator),
            Algorithm::RunMerge => run_merge_sort(handle, proxy, comparator),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

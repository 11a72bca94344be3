//! Size-dispatched strategy object.
//!
//! A [`Sorter`] is built once from a length function and an index comparator
//! and can then sort any number of handles. Each call picks binary insertion
//! sort for short inputs and heap sort otherwise.

use crate::algo::Algorithm;
use crate::core::IndexComparator;
use crate::permutation;

/// Inputs shorter than this use binary insertion sort, longer ones heap sort.
pub const INSERTION_SORT_THRESHOLD: usize = 80;

/// Reusable sorter for one `(length function, comparator)` pair.
///
/// # Examples
///
/// ```
/// use proxysort::{sorter_for, Algorithm, Natural};
///
/// let sorter = sorter_for(<[u32]>::len, Natural);
/// let data = [30u32, 10, 20];
///
/// assert_eq!(sorter.sort(&data[..]), vec![1, 2, 0]);
/// assert_eq!(sorter.algorithm_for(data.len()), Algorithm::BinaryInsertion);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sorter<L, C> {
    length: L,
    comparator: C,
    threshold: usize,
}

/// Creates a [`Sorter`] using the default [`INSERTION_SORT_THRESHOLD`].
pub fn sorter_for<L, C>(length: L, comparator: C) -> Sorter<L, C> {
    Sorter {
        length,
        comparator,
        threshold: INSERTION_SORT_THRESHOLD,
    }
}

impl<L, C> Sorter<L, C> {
    /// Overrides the size below which binary insertion sort is used.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The strategy used for an input of `len` elements.
    pub fn algorithm_for(&self, len: usize) -> Algorithm {
        Algorithm::select(len, self.threshold)
    }

    /// Returns the permutation that reads `handle` in ascending order.
    ///
    /// Stable for inputs below the threshold only.
    pub fn sort<H>(&self, handle: &H) -> Vec<usize>
    where
        H: ?Sized,
        L: Fn(&H) -> usize,
        C: IndexComparator<H>,
    {
        let len = (self.length)(handle);
        let mut proxy = permutation::identity(len);
        self.algorithm_for(len)
            .sort(handle, &mut proxy, &self.comparator);
        proxy
    }
}

//! One-shot proxy sort entry points.
//!
//! Every function here returns a permutation of indices and leaves the input
//! untouched. [`sort`] and [`sort_range`] are the general forms; the rest are
//! conveniences fixing the comparator or the handle type.

use crate::algo::Algorithm;
use crate::core::{ByElement, IndexComparator, Natural, Seq, TotalOrder};
use crate::error::{Result, check_range};
use crate::permutation;
use std::cmp::Ordering;
use std::ops::Range;

/// Performs an index-based sort of the first `len` positions of `handle`.
///
/// This function does not modify the handle. Instead, it returns a `Vec<usize>`
/// containing the indices that order it, using the stable run-merge engine.
///
/// # Arguments
///
/// * `handle` - The collection to be sorted, opaque to the engine.
/// * `len` - The number of positions to sort.
/// * `comparator` - Compares the elements at two positions of `handle`.
///
/// # Returns
///
/// A permutation `p` of `0..len` such that
/// `comparator.compare(handle, p[i], p[i + 1]) != Ordering::Greater`.
///
/// # Examples
///
/// ```
/// use proxysort::sort;
///
/// let data = [5, 3, 3, 1, 4];
/// let indices = sort(&data[..], data.len(), |a: &[i32], i: usize, j: usize| a[i].cmp(&a[j]));
///
/// assert_eq!(indices, vec![3, 1, 2, 4, 0]); // 1, 3, 3, 4, 5
/// ```
pub fn sort<H, C>(handle: &H, len: usize, comparator: C) -> Vec<usize>
where
    H: ?Sized,
    C: IndexComparator<H>,
{
    sort_with(Algorithm::RunMerge, handle, len, comparator)
}

/// Like [`sort`], with an explicitly chosen [`Algorithm`].
pub fn sort_with<H, C>(algorithm: Algorithm, handle: &H, len: usize, comparator: C) -> Vec<usize>
where
    H: ?Sized,
    C: IndexComparator<H>,
{
    let mut proxy = permutation::identity(len);
    algorithm.sort(handle, &mut proxy, &comparator);
    proxy
}

/// Sorts the positions `range` of a handle with `len` positions.
///
/// The returned indices stay in the original index space: they are drawn
/// from `range`, not rebased to start at 0.
///
/// # Errors
///
/// [`SortError::InvalidRange`](crate::SortError::InvalidRange) if
/// `range.start > range.end`,
/// [`SortError::OutOfBounds`](crate::SortError::OutOfBounds) if
/// `range.end > len`. Nothing is allocated in either case.
///
/// # Examples
///
/// ```
/// use proxysort::{sort_range, Natural};
///
/// let data = [5, 3, 3, 1, 4];
/// let indices = sort_range(&data[..], data.len(), 1..4, Natural).unwrap();
///
/// assert_eq!(indices, vec![3, 1, 2]); // 1, 3, 3
/// ```
pub fn sort_range<H, C>(
    handle: &H,
    len: usize,
    range: Range<usize>,
    comparator: C,
) -> Result<Vec<usize>>
where
    H: ?Sized,
    C: IndexComparator<H>,
{
    check_range(&range, len)?;

    let mut proxy = permutation::identity_range(range);
    Algorithm::RunMerge.sort(handle, &mut proxy, &comparator);
    Ok(proxy)
}

/// Sorts an `i32` slice by natural order.
pub fn sort_i32(array: &[i32]) -> Vec<usize> {
    sort(array, array.len(), Natural)
}

/// Sorts an `i64` slice by natural order.
pub fn sort_i64(array: &[i64]) -> Vec<usize> {
    sort(array, array.len(), Natural)
}

/// Sorts an `f64` slice by IEEE 754 total order.
///
/// ```
/// let distances = [0.5, f64::NAN, -1.0, 2.0];
/// assert_eq!(proxysort::sort_f64(&distances), vec![2, 0, 3, 1]);
/// ```
pub fn sort_f64(array: &[f64]) -> Vec<usize> {
    sort(array, array.len(), TotalOrder)
}

/// Sorts an `f32` slice by IEEE 754 total order.
pub fn sort_f32(array: &[f32]) -> Vec<usize> {
    sort(array, array.len(), TotalOrder)
}

/// Sorts a slice of [`Ord`] elements by natural order.
pub fn sort_ord<T: Ord>(array: &[T]) -> Vec<usize> {
    sort_seq(array)
}

/// Sorts a slice with an element comparator.
///
/// ```
/// let words = ["pear", "fig", "banana"];
/// let indices = proxysort::sort_by(&words, |a, b| b.len().cmp(&a.len()));
///
/// assert_eq!(indices, vec![2, 0, 1]);
/// ```
pub fn sort_by<T, F>(array: &[T], compare: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_seq_by(array, compare)
}

/// Sorts any [`Seq`] of [`Ord`] elements by natural order.
pub fn sort_seq<S>(seq: &S) -> Vec<usize>
where
    S: Seq + ?Sized,
    S::Item: Ord,
{
    sort(seq, seq.len(), Natural)
}

/// Sorts any [`Seq`] with an element comparator.
pub fn sort_seq_by<S, F>(seq: &S, compare: F) -> Vec<usize>
where
    S: Seq + ?Sized,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    sort(seq, seq.len(), ByElement(compare))
}

/// Sorts `range` of a slice of [`Ord`] elements by natural order.
///
/// See [`sort_range`] for the error cases.
pub fn sort_ord_range<T: Ord>(array: &[T], range: Range<usize>) -> Result<Vec<usize>> {
    sort_range(array, array.len(), range, Natural)
}

/// Sorts `range` of a [`Seq`] with an element comparator.
///
/// See [`sort_range`] for the error cases.
pub fn sort_seq_range_by<S, F>(seq: &S, range: Range<usize>, compare: F) -> Result<Vec<usize>>
where
    S: Seq + ?Sized,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    sort_range(seq, seq.len(), range, ByElement(compare))
}

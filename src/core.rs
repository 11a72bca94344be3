//! Core traits and types for proxy sorting.
//!
//! This module defines:
//! - [`IndexComparator`]: The main trait users implement to sort their custom handles.
//! - [`Seq`]: Random-access view over a collection of elements.
//! - Ready-made comparators: [`Natural`], [`TotalOrder`], [`ByElement`] and [`Reversed`].

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Compares the elements located at two positions of an opaque handle.
///
/// The sorting engine never inspects the handle itself. It only hands it back
/// to the comparator together with two indices, so the same algorithms can
/// sort primitive slices, slices of records, or any custom container.
///
/// Implementations must be pure and consistent for the duration of one sort.
/// Ties (`Ordering::Equal`) are allowed.
///
/// Any `Fn(&H, usize, usize) -> Ordering` closure is an index comparator.
///
/// # Examples
///
/// ```
/// use proxysort::{reversed, sort};
///
/// // Compare by absolute value.
/// let by_abs = |v: &[i32], i: usize, j: usize| v[i].abs().cmp(&v[j].abs());
/// let data = [-3, 1, -2];
///
/// assert_eq!(sort(&data[..], data.len(), by_abs), vec![1, 2, 0]);
/// assert_eq!(sort(&data[..], data.len(), reversed(by_abs)), vec![0, 2, 1]);
/// ```
pub trait IndexComparator<H: ?Sized> {
    /// Three-way comparison of the elements at `i` and `j` of `handle`.
    fn compare(&self, handle: &H, i: usize, j: usize) -> Ordering;
}

impl<H, F> IndexComparator<H> for F
where
    H: ?Sized,
    F: Fn(&H, usize, usize) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, handle: &H, i: usize, j: usize) -> Ordering {
        self(handle, i, j)
    }
}

/// Returns a comparator that imposes the reverse order of `comparator`.
///
/// Only strict orderings flip. Equal elements stay equal, so a stable sort
/// with the reversed comparator keeps ties in their original order.
pub fn reversed<C>(comparator: C) -> Reversed<C> {
    Reversed(comparator)
}

/// Comparator adaptor swapping the two compared positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Reversing twice restores the original comparator.
    pub fn reversed(self) -> C {
        self.0
    }
}

impl<H, C> IndexComparator<H> for Reversed<C>
where
    H: ?Sized,
    C: IndexComparator<H>,
{
    #[inline(always)]
    fn compare(&self, handle: &H, i: usize, j: usize) -> Ordering {
        self.0.compare(handle, j, i)
    }
}

/// Natural ordering of any [`Seq`] whose elements implement [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl Natural {
    pub fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<S> IndexComparator<S> for Natural
where
    S: Seq + ?Sized,
    S::Item: Ord,
{
    #[inline(always)]
    fn compare(&self, handle: &S, i: usize, j: usize) -> Ordering {
        handle.get_item(i).cmp(handle.get_item(j))
    }
}

/// Floating point types with an IEEE 754 total order.
pub trait TotalOrd {
    fn total_order(&self, other: &Self) -> Ordering;
}

impl TotalOrd for f32 {
    #[inline(always)]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalOrd for f64 {
    #[inline(always)]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Total ordering of floating point sequences.
///
/// `-0.0` sorts before `0.0`. Positive NaNs sort after every number and
/// negative NaNs before every number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TotalOrder;

impl TotalOrder {
    pub fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<S> IndexComparator<S> for TotalOrder
where
    S: Seq + ?Sized,
    S::Item: TotalOrd,
{
    #[inline(always)]
    fn compare(&self, handle: &S, i: usize, j: usize) -> Ordering {
        handle.get_item(i).total_order(handle.get_item(j))
    }
}

/// Lifts an element comparator `Fn(&T, &T) -> Ordering` to an index
/// comparator over any [`Seq`] of `T`.
///
/// ```
/// use proxysort::{sort, ByElement};
///
/// let words = vec!["pear", "fig", "banana"];
/// let by_len = ByElement(|a: &&str, b: &&str| a.len().cmp(&b.len()));
///
/// assert_eq!(sort(&words, words.len(), by_len), vec![1, 0, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ByElement<F>(pub F);

impl<F> ByElement<F> {
    pub fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<S, F> IndexComparator<S> for ByElement<F>
where
    S: Seq + ?Sized,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, handle: &S, i: usize, j: usize) -> Ordering {
        (self.0)(handle.get_item(i), handle.get_item(j))
    }
}

/// A random-access sequence of elements.
///
/// This trait allows the convenience entry points to sort any collection
/// with O(1) indexed access, without copying or moving its elements.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use proxysort::core::Seq;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl Seq for Scores {
///     type Item = u32;
///
///     fn get_item(&self, index: usize) -> &u32 {
///         &self.values[index]
///     }
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
/// }
///
/// let scores = Scores { values: vec![30, 10, 20] };
/// assert_eq!(proxysort::sort_seq(&scores), vec![1, 2, 0]);
/// ```
pub trait Seq {
    type Item;

    /// Returns the element at `index`.
    ///
    /// Panics if `index` is out of bounds.
    fn get_item(&self, index: usize) -> &Self::Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Seq for [T] {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Seq for [T; N] {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        N
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T> Seq for Vec<T> {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

// VecDeque indexing is O(1), even across the ring buffer wrap.
impl<T> Seq for VecDeque<T> {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_comparator() {
        let cmp = |v: &[i32], i: usize, j: usize| v[i].cmp(&v[j]);
        let data = [2, 1];
        assert_eq!(cmp.compare(&data[..], 0, 1), Ordering::Greater);
        assert_eq!(reversed(cmp).compare(&data[..], 0, 1), Ordering::Less);
    }

    #[test]
    fn reversed_keeps_ties() {
        let data = vec![7, 7];
        assert_eq!(Natural.compare(&data, 0, 1), Ordering::Equal);
        assert_eq!(Natural.reversed().compare(&data, 0, 1), Ordering::Equal);
        assert_eq!(Natural.reversed().reversed(), Natural);
    }

    #[test]
    fn total_order_places_nan_last() {
        let data = [f64::NAN, 1.0, -0.0, 0.0];
        assert_eq!(TotalOrder.compare(&data[..], 0, 1), Ordering::Greater);
        assert_eq!(TotalOrder.compare(&data[..], 2, 3), Ordering::Less);
    }

    #[test]
    fn seq_impls_agree() {
        let array = [3, 1, 2];
        let vec = array.to_vec();
        let deque: VecDeque<i32> = array.iter().copied().collect();

        assert_eq!(Seq::len(&array), 3);
        assert_eq!(Seq::len(&vec), 3);
        assert_eq!(Seq::len(&deque), 3);
        assert_eq!(Seq::get_item(&array[..], 1), &1);
        assert_eq!(Seq::get_item(&deque, 2), &2);
        assert!(Seq::is_empty(&Vec::<u8>::new()));
    }

    #[test]
    fn by_element_uses_element_comparator() {
        let words = ["ccc", "a", "bb"];
        let by_len = ByElement(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert_eq!(by_len.compare(&words, 1, 2), Ordering::Less);
        assert_eq!(by_len.reversed().compare(&words, 1, 2), Ordering::Greater);
    }
}

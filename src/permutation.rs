//! Helpers for building and reading permutation buffers.
//!
//! A permutation buffer (the "proxy") holds indices into the original index
//! space of a handle. Sorting only reorders the buffer; the handle is never
//! touched.

use crate::core::Seq;
use std::ops::Range;

/// Returns the identity permutation `[0, 1, .., len - 1]`.
pub fn identity(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Returns the identity permutation of a sub-range, `[from, .., to - 1]`.
///
/// The values stay in the original index space, they are not rebased to 0.
pub fn identity_range(range: Range<usize>) -> Vec<usize> {
    range.collect()
}

/// Resets an existing buffer to the identity permutation.
pub fn init(proxy: &mut [usize]) -> &mut [usize] {
    proxy.iter_mut().enumerate().for_each(|(i, p)| *p = i);
    proxy
}

/// Checks that `proxy` is a bijection onto `range`.
pub fn is_permutation_of(proxy: &[usize], range: Range<usize>) -> bool {
    if proxy.len() != range.len() {
        return false;
    }

    let mut seen = vec![false; proxy.len()];
    proxy.iter().all(|&p| {
        range.contains(&p) && !std::mem::replace(&mut seen[p - range.start], true)
    })
}

/// Iterates `seq` in the order given by `proxy`.
///
/// ```
/// use proxysort::permutation::permuted;
///
/// let data = vec![5, 3, 3, 1, 4];
/// let proxy = proxysort::sort_seq(&data);
/// let sorted: Vec<i32> = permuted(&data, &proxy).copied().collect();
///
/// assert_eq!(sorted, vec![1, 3, 3, 4, 5]);
/// ```
pub fn permuted<'a, S>(seq: &'a S, proxy: &'a [usize]) -> impl Iterator<Item = &'a S::Item> + 'a
where
    S: Seq + ?Sized,
{
    proxy.iter().map(move |&index| seq.get_item(index))
}

/// Inverts a full-range permutation.
///
/// For a sort result, `ranks(&proxy)[i]` is the position element `i` takes
/// in sorted order.
///
/// Panics if `proxy` is not a permutation of `0..proxy.len()`.
pub fn ranks(proxy: &[usize]) -> Vec<usize> {
    assert!(
        is_permutation_of(proxy, 0..proxy.len()),
        "proxy is not a permutation of 0..{}",
        proxy.len()
    );

    let mut ranks = vec![0; proxy.len()];
    proxy
        .iter()
        .enumerate()
        .for_each(|(position, &index)| ranks[index] = position);
    ranks
}

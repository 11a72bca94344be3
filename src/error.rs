//! Error types for range-restricted sorts.

use std::ops::Range;
use thiserror::Error;

/// Errors reported by the range-restricted entry points.
///
/// Full-range sorts cannot fail; every variant here is a caller contract
/// violation detected before any permutation buffer is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The range start lies after its end.
    #[error("invalid range: from index ({from}) > to index ({to})")]
    InvalidRange { from: usize, to: usize },

    /// The range reaches past the end of the collection.
    #[error("range [{from}, {to}) out of bounds for length {len}")]
    OutOfBounds { from: usize, to: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SortError>;

/// Validates `range` against a collection of `len` elements.
///
/// `from > to` is checked first, so a range that is both reversed and out
/// of bounds reports [`SortError::InvalidRange`].
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    let (from, to) = (range.start, range.end);
    if from > to {
        log::debug!("rejecting reversed range [{from}, {to})");
        return Err(SortError::InvalidRange { from, to });
    }
    if to > len {
        log::debug!("rejecting range [{from}, {to}) for length {len}");
        return Err(SortError::OutOfBounds { from, to, len });
    }
    Ok(())
}

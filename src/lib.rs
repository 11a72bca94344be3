//! # Proxysort
//!
//! `proxysort` is an index-proxy sorting library: instead of reordering a collection,
//! it returns the permutation of indices that reads the collection in ascending order.
//!
//! The collection is never moved, copied or cloned. The engine only ever sees an opaque
//! handle and an [`IndexComparator`] that compares the elements at two positions of it,
//! so the same algorithms sort primitive slices, slices of records, or any custom
//! container through one contract.
//!
//! ## Key Features
//!
//! - **Zero-Copy abstractions**: The [`IndexComparator`] trait (and the [`Seq`] trait for
//!   element-wise access) allows sorting arbitrary data structures without moving their
//!   elements.
//! - **Stable by default**: [`sort`] uses a run-chunked bottom-up merge sort, so equal
//!   elements keep their original relative order.
//! - **Size dispatch**: [`sorter_for`] builds a reusable [`Sorter`] that picks binary
//!   insertion sort for short inputs and heap sort for long ones.
//! - **Sub-range sorts**: [`sort_range`] sorts a window of the collection and returns
//!   indices in the original index space.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For slices of ordered values, use [`sort_ord`] or one of the primitive shortcuts.
//!
//! ```rust
//! use proxysort::sort_ord;
//!
//! let data = vec!["banana", "apple", "cherry", "date"];
//! let indices = sort_ord(&data);
//!
//! assert_eq!(indices, vec![1, 0, 2, 3]);
//! ```
//!
//! ### Custom Handles
//!
//! Any `Fn(&H, usize, usize) -> Ordering` closure is an index comparator, so custom
//! containers need no wrapper type.
//!
//! ```rust
//! use proxysort::sort;
//!
//! struct Population {
//!     fitness: Vec<f64>,
//! }
//!
//! let population = Population { fitness: vec![0.7, 0.2, 0.9] };
//! let by_fitness = |p: &Population, i: usize, j: usize| p.fitness[i].total_cmp(&p.fitness[j]);
//!
//! // Returns indices: [1, 0, 2] (0.2, 0.7, 0.9)
//! let indices = sort(&population, population.fitness.len(), by_fitness);
//! assert_eq!(indices, vec![1, 0, 2]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Run-merge sort**: *O*(*n* \* log(*n*)) comparisons, stable.
//! - **Binary insertion sort**: *O*(*n* \* log(*n*)) comparisons, *O*(*n*²) index moves, stable.
//! - **Heap sort**: *O*(*n* \* log(*n*)) comparisons worst case, not stable.
//! - **Memory Overhead**: The returned `Vec<usize>` plus, for the merge sort, scratch
//!   copies of the two blocks being merged.
//!
//! All sorts run synchronously on the calling thread and keep no state between calls.

pub mod algo;
pub mod core;
pub mod error;
pub mod permutation;
pub mod proxy;
pub mod sorter;

pub use algo::Algorithm;
pub use core::{ByElement, IndexComparator, Natural, Reversed, Seq, TotalOrder, reversed};
pub use error::SortError;
pub use proxy::{
    sort, sort_by, sort_f32, sort_f64, sort_i32, sort_i64, sort_ord, sort_ord_range, sort_range,
    sort_seq, sort_seq_by, sort_seq_range_by, sort_with,
};
pub use sorter::{INSERTION_SORT_THRESHOLD, Sorter, sorter_for};

pub mod prelude {
    pub use crate::algo::Algorithm;
    pub use crate::core::{ByElement, IndexComparator, Natural, Reversed, Seq, TotalOrder, reversed};
    pub use crate::error::SortError;
    pub use crate::proxy::*;
    pub use crate::sorter::{Sorter, sorter_for};
}

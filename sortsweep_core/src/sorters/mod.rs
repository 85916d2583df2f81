//! Implementations of the three classical sorting algorithms benchmarked by
//! the sweep: bubble sort, selection sort and merge sort.
//!
//! # Example
//!
//! ```
//! use sortsweep_core::sorters::{MergeSorter, Sorter};
//!
//! let sorted = MergeSorter.sort(vec![5, 3, 8, 1]).unwrap();
//! assert_eq!(sorted, vec![1, 3, 5, 8]);
//! ```

mod bubble_sorter;
mod merge_sorter;
mod selection_sorter;

pub use bubble_sorter::BubbleSorter;
pub use merge_sorter::MergeSorter;
pub use selection_sorter::SelectionSorter;

use clap::ValueEnum;
use std::error::Error as StdError;
use std::fmt;

/// A sorting algorithm must implement the trait `Sorter`.
///
/// The input vector is taken by value: bubble and selection sort mutate it in
/// place and hand it back, merge sort allocates a new vector. Either way the
/// caller gets back a sorted vector holding the same values.
pub trait Sorter {
    /// Human readable name of the algorithm, used in reports.
    fn name(&self) -> &'static str;

    /// Sorts `values` into non-decreasing order.
    fn sort(&self, values: Vec<i32>) -> Result<Vec<i32>, SortError>;
}

/// The designated failure signal of a [`Sorter`].
///
/// Selection sort and merge sort refuse a zero length input and return
/// [`SortError::EmptyInput`] instead of sorting. Bubble sort does not; it
/// returns the empty vector unchanged. That asymmetry is deliberate and
/// documented, see the notes on [`BubbleSorter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Raised when a sorter that guards against empty input is handed a zero
    /// length vector.
    EmptyInput,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::EmptyInput => write!(f, "cannot sort an empty input"),
        }
    }
}

impl StdError for SortError {}

/// Selector for which algorithm a sweep should benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Selection,
    Merge,
}

impl Algorithm {
    /// Resolves a raw numeric selector (as typed at the interactive prompt)
    /// into an algorithm. Only `1`, `2` and `3` are accepted.
    pub fn from_selector(selector: u32) -> Option<Algorithm> {
        match selector {
            1 => Some(Algorithm::Bubble),
            2 => Some(Algorithm::Selection),
            3 => Some(Algorithm::Merge),
            _ => None,
        }
    }

    /// The sorter implementing this algorithm.
    pub fn sorter(self) -> &'static dyn Sorter {
        match self {
            Algorithm::Bubble => &BubbleSorter,
            Algorithm::Selection => &SelectionSorter,
            Algorithm::Merge => &MergeSorter,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sorter().name())
    }
}

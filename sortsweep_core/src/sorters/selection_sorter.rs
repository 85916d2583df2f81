use crate::sorters::{SortError, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortsweep_core::sorters::{SelectionSorter, Sorter};
///
/// let sorted = SelectionSorter.sort(vec![1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort divides the input into a sorted prefix and an unsorted
/// suffix. Each step finds the smallest element of the suffix and swaps it to
/// the front of the suffix, growing the sorted prefix by one.
///
/// This implementation works through a recursive helper over a closed index
/// range `[low, hi]`: find the minimum in the range, swap it into `low`,
/// recurse on `[low + 1, hi]`. A range of size one is the base case and needs
/// no work. The recursion is a tail call one level deep per element, so even
/// the full sweep range stays well within stack limits.
///
/// A zero length input is refused with [`SortError::EmptyInput`].
pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn sort(&self, mut values: Vec<i32>) -> Result<Vec<i32>, SortError> {
        if values.is_empty() {
            return Err(SortError::EmptyInput);
        }
        let hi = values.len() - 1;
        selection_helper(&mut values, 0, hi);
        Ok(values)
    }
}

/// Sorts the closed range `[low, hi]` of `values`.
fn selection_helper(values: &mut [i32], low: usize, hi: usize) {
    if low == hi {
        return;
    }
    let min = find_min(values, low, hi);
    values.swap(low, min);
    selection_helper(values, low + 1, hi);
}

/// Index of the minimum element within the closed range `[low, hi]`.
fn find_min(values: &[i32], low: usize, hi: usize) -> usize {
    let mut min = low;
    for i in (low + 1)..=hi {
        if values[i] < values[min] {
            min = i;
        }
    }
    min
}

use crate::sorters::{SortError, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortsweep_core::sorters::{BubbleSorter, Sorter};
///
/// let sorted = BubbleSorter.sort(vec![1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort, is a simple sorting
/// algorithm that repeatedly steps through the list, compares adjacent
/// elements and swaps them if they are in the wrong order. After each pass
/// the largest remaining element has bubbled to the end of the unsorted
/// range, so every pass sweeps one element fewer than the last.
///
/// This variant carries no early exit: a pass that performs no swap does not
/// cut the sweep short, so an already sorted input still costs the full
/// `len - 1` passes. That keeps the quadratic growth the sweep chart is meant
/// to show visible on every dataset shape.
///
/// Bubble sort is also the one sorter without an empty-input guard. A zero
/// length vector trivially falls through both loops and is returned as is,
/// where [`SelectionSorter`](crate::sorters::SelectionSorter) and
/// [`MergeSorter`](crate::sorters::MergeSorter) signal
/// [`SortError::EmptyInput`]. The asymmetry is kept as documented behavior.
#[derive(Default)]
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    #[inline]
    fn sort(&self, mut values: Vec<i32>) -> Result<Vec<i32>, SortError> {
        let len = values.len();
        for pass in 1..len {
            // Elements past len - pass have already settled.
            for i in 1..=(len - pass) {
                if values[i - 1] > values[i] {
                    values.swap(i - 1, i);
                }
            }
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let sorted = BubbleSorter.sort(vec![1, 5, 4, 2, 3]).unwrap();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let sorted = BubbleSorter.sort((1..10).collect()).unwrap();
        assert_eq!(sorted, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let sorted = BubbleSorter.sort((1..1000).rev().collect()).unwrap();
        assert_eq!(sorted, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn empty_array_is_not_an_error() {
        // Unlike the other two sorters, bubble sort has no empty-input guard.
        let sorted = BubbleSorter.sort(vec![]).unwrap();
        assert_eq!(sorted, vec![]);
    }

    #[test]
    fn duplicates_survive() {
        let sorted = BubbleSorter.sort(vec![3, 1, 3, 2, 1]).unwrap();
        assert_eq!(sorted, vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn simple_edge_cases() {
        let one = BubbleSorter.sort(vec![1]).unwrap();
        assert_eq!(one, vec![1]);

        let two = BubbleSorter.sort(vec![1, 2]).unwrap();
        assert_eq!(two, vec![1, 2]);

        let two = BubbleSorter.sort(vec![2, 1]).unwrap();
        assert_eq!(two, vec![1, 2]);

        let three = BubbleSorter.sort(vec![3, 1, 2]).unwrap();
        assert_eq!(three, vec![1, 2, 3]);
    }
}

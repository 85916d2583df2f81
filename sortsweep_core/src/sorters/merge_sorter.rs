use crate::sorters::{SortError, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortsweep_core::sorters::{MergeSorter, Sorter};
///
/// let sorted = MergeSorter.sort(vec![1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Classic divide and conquer. A slice of length one is already sorted.
/// Anything longer is split at `len / 2`, each half is sorted recursively,
/// and the two sorted halves are merged into a freshly allocated vector.
///
/// The merge repeatedly takes the smaller of the two current heads; once one
/// side runs dry the rest of the other side is appended wholesale. Ties go to
/// the left half, which makes the merge stable: equal values keep their
/// left-to-right order from the input. The merge reads its inputs without
/// mutating them and runs in time linear in their combined length.
///
/// Unlike bubble sort, a zero length input is refused with
/// [`SortError::EmptyInput`].
pub struct MergeSorter;

impl Sorter for MergeSorter {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort(&self, values: Vec<i32>) -> Result<Vec<i32>, SortError> {
        if values.is_empty() {
            return Err(SortError::EmptyInput);
        }
        Ok(merge_sort(&values))
    }
}

fn merge_sort(values: &[i32]) -> Vec<i32> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let mid = values.len() / 2;
    merge(&merge_sort(&values[..mid]), &merge_sort(&values[mid..]))
}

/// Merges two individually sorted slices into one sorted vector.
///
/// On a tie the element from `left` is taken first, so the merge is stable
/// with a left bias.
pub(crate) fn merge(left: &[i32], right: &[i32]) -> Vec<i32> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let sorted = MergeSorter.sort(vec![1, 5, 4, 2, 3]).unwrap();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let sorted = MergeSorter.sort((1..10).collect()).unwrap();
        assert_eq!(sorted, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let sorted = MergeSorter.sort((1..1000).rev().collect()).unwrap();
        assert_eq!(sorted, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn empty_array_is_refused() {
        assert_eq!(MergeSorter.sort(vec![]), Err(SortError::EmptyInput));
    }

    #[test]
    fn merge_combines_sorted_slices() {
        assert_eq!(merge(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(merge(&[4, 5, 6], &[1, 2, 3]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(merge(&[], &[1, 2]), vec![1, 2]);
        assert_eq!(merge(&[1, 2], &[]), vec![1, 2]);
        assert_eq!(merge(&[], &[]), Vec::<i32>::new());
    }

    #[test]
    fn merge_length_is_sum_of_inputs() {
        let left = [1, 2, 2, 9];
        let right = [0, 2, 3];
        assert_eq!(merge(&left, &right).len(), left.len() + right.len());
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        // Values tie but the slices do not mutate, so we can check the bias
        // by interleaving: every tied pick must come from the left first.
        let left = [1, 2, 2];
        let right = [2, 3];
        let merged = merge(&left, &right);
        assert_eq!(merged, vec![1, 2, 2, 2, 3]);

        // With distinguishable positions: left's 2s occupy indices 1 and 2,
        // right's 2 lands after them at index 3.
        let mut i = 0;
        let mut j = 0;
        for &value in &merged {
            if i < left.len() && left[i] == value {
                i += 1;
            } else {
                assert_eq!(right[j], value);
                j += 1;
            }
        }
        assert_eq!((i, j), (left.len(), right.len()));
    }

    #[test]
    fn simple_edge_cases() {
        let one = MergeSorter.sort(vec![1]).unwrap();
        assert_eq!(one, vec![1]);

        let two = MergeSorter.sort(vec![1, 2]).unwrap();
        assert_eq!(two, vec![1, 2]);

        let two = MergeSorter.sort(vec![2, 1]).unwrap();
        assert_eq!(two, vec![1, 2]);

        let three = MergeSorter.sort(vec![3, 1, 2]).unwrap();
        assert_eq!(three, vec![1, 2, 3]);
    }
}

use crate::SortError;

use super::common::{self, STACK_GROW_BYTES, STACK_RED_ZONE_BYTES};

/// Top-down merge sort over the inclusive range `[lo, hi]`.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi` is out of bounds.
pub fn merge_sort(data: &mut [i32], lo: usize, hi: usize) -> Result<u64, SortError> {
    common::assert_range(data, lo, hi);
    merge_sort_recursive(data, lo, hi)
}

fn merge_sort_recursive(data: &mut [i32], lo: usize, hi: usize) -> Result<u64, SortError> {
    if lo == hi {
        return Ok(0);
    }

    let mid = lo + (hi - lo) / 2;
    stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROW_BYTES, || {
        let mut ops = merge_sort_recursive(data, lo, mid)?;
        ops += merge_sort_recursive(data, mid + 1, hi)?;
        ops += merge(data, lo, mid, hi)?;
        Ok(ops)
    })
}

/// Merges the sorted runs `[lo, mid]` and `[mid + 1, hi]`.
///
/// One operation per key comparison, one per element copied from the run
/// left over once the other is exhausted, plus one for the check that ends
/// that copy. Equal keys take the right element.
pub fn merge(data: &mut [i32], lo: usize, mid: usize, hi: usize) -> Result<u64, SortError> {
    common::assert_range(data, lo, hi);
    assert!(lo <= mid && mid < hi, "mid {mid} outside [{lo}, {hi})");

    let len = hi - lo + 1;
    let mut aux = Vec::new();
    aux.try_reserve_exact(len).map_err(|_| SortError::ScratchAlloc { len })?;

    let mut ops = 0;
    let mut i = lo;
    let mut j = mid + 1;
    while i <= mid && j <= hi {
        ops += 1;
        if data[i] < data[j] {
            aux.push(data[i]);
            i += 1;
        } else {
            aux.push(data[j]);
            j += 1;
        }
    }

    if i > mid {
        ops += (hi + 1 - j) as u64 + 1;
        aux.extend_from_slice(&data[j..hi + 1]);
    } else {
        ops += (mid + 1 - i) as u64 + 1;
        aux.extend_from_slice(&data[i..mid + 1]);
    }

    data[lo..=hi].copy_from_slice(&aux);
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Closed form of the count: every merge of `n` keys costs `n + 1`.
    fn expected_ops(n: usize) -> u64 {
        if n <= 1 {
            return 0;
        }
        let left = n.div_ceil(2);
        expected_ops(left) + expected_ops(n - left) + n as u64 + 1
    }

    #[test]
    fn two_elements() {
        let mut a = [2, 1];
        let mut b = [1, 2];
        assert_eq!(merge_sort(&mut a, 0, 1), Ok(3));
        assert_eq!(merge_sort(&mut b, 0, 1), Ok(3));
        assert_eq!(a, [1, 2]);
        assert_eq!(b, [1, 2]);
    }

    #[test]
    fn single_element_is_free() {
        let mut data = [7, 3];
        assert_eq!(merge_sort(&mut data, 1, 1), Ok(0));
        assert_eq!(data, [7, 3]);
    }

    #[test]
    fn count_does_not_depend_on_input_order() {
        let mut shuffled = [5, 3, 1, 4, 2];
        let mut sorted = [1, 2, 3, 4, 5];
        let a = merge_sort(&mut shuffled, 0, 4).unwrap();
        let b = merge_sort(&mut sorted, 0, 4).unwrap();
        assert_eq!(shuffled, sorted);
        assert_eq!(a, b);
        assert_eq!(a, 16);
    }

    #[test]
    fn merge_counts_comparisons_and_tail() {
        // Left run exhausted after 3 comparisons, right tail of 2 copied.
        let mut data = [1, 2, 3, 4, 5];
        assert_eq!(merge(&mut data, 0, 2, 4), Ok(3 + 2 + 1));

        // Right run exhausted first.
        let mut data = [4, 5, 6, 1, 2];
        assert_eq!(merge(&mut data, 0, 2, 4), Ok(2 + 3 + 1));
        assert_eq!(data, [1, 2, 4, 5, 6]);
    }

    #[test]
    fn subrange_only() {
        let mut data = [9, 8, 3, 1, 2, 0];
        merge_sort(&mut data, 2, 4).unwrap();
        assert_eq!(data, [9, 8, 1, 2, 3, 0]);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn inverted_range_is_fatal() {
        let mut data = [1, 2, 3];
        let _ = merge_sort(&mut data, 2, 0);
    }

    #[test]
    fn fixed_seed_permutations_match_closed_form() {
        let mut rng = StdRng::seed_from_u64(0x3E26_2026);
        for &size in &[1_usize, 2, 3, 7, 8, 33, 100, 1000] {
            let mut data: Vec<i32> = (1..=size as i32).collect();
            data.shuffle(&mut rng);
            let ops = merge_sort(&mut data, 0, size - 1).unwrap();
            assert_eq!(ops, expected_ops(size), "size={size}");
            assert!(common::is_sorted_non_decreasing(&data));
        }
    }

    #[test]
    fn many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let mut data: Vec<i32> = (0..512).map(|_| rng.random_range(0..8)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        merge_sort(&mut data, 0, 511).unwrap();
        assert_eq!(data, expected);
    }
}

use super::common::{self, STACK_GROW_BYTES, STACK_RED_ZONE_BYTES};
use super::pivot::PivotStrategy;

/// Outcome of one quicksort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QuickSortRun {
    pub ops: u64,
    /// Deepest recursion level reached; the outermost call is level 1.
    pub max_depth: usize,
}

/// Quicksort over the inclusive range `[lo, hi]`.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi` is out of bounds.
pub fn quicksort(data: &mut [i32], lo: usize, hi: usize, pivot: PivotStrategy) -> u64 {
    quicksort_run(data, lo, hi, pivot).ops
}

/// Same as [`quicksort`], additionally reporting the recursion depth.
pub fn quicksort_run(
    data: &mut [i32],
    lo: usize,
    hi: usize,
    pivot: PivotStrategy,
) -> QuickSortRun {
    common::assert_range(data, lo, hi);
    let mut max_depth = 0;
    let ops = quicksort_recursive(data, lo, hi, pivot, 1, &mut max_depth);
    QuickSortRun { ops, max_depth }
}

fn quicksort_recursive(
    data: &mut [i32],
    lo: usize,
    hi: usize,
    pivot: PivotStrategy,
    depth: usize,
    max_depth: &mut usize,
) -> u64 {
    *max_depth = (*max_depth).max(depth);
    if lo == hi {
        return 0;
    }

    let (pos, mut ops) = partition(data, lo, hi, pivot);

    stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROW_BYTES, || {
        // Only sub-ranges of two or more keys are visited.
        if pos > lo + 1 {
            ops += quicksort_recursive(data, lo, pos - 1, pivot, depth + 1, max_depth);
        }
        if pos + 1 < hi {
            ops += quicksort_recursive(data, pos + 1, hi, pivot, depth + 1, max_depth);
        }
    });

    ops
}

/// Lomuto partition of `[lo, hi]` around the key chosen by `pivot`.
///
/// Returns the pivot's final index together with the operations spent, one
/// per key compared against the pivot plus whatever the strategy charged.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi` is out of bounds.
pub fn partition(data: &mut [i32], lo: usize, hi: usize, pivot: PivotStrategy) -> (usize, u64) {
    let (p, mut ops) = pivot.select(data, lo, hi);
    common::swap(data, lo, p);

    let key = data[lo];
    let mut pos = lo;
    for i in lo + 1..=hi {
        ops += 1;
        if data[i] < key {
            pos += 1;
            common::swap(data, i, pos);
        }
    }
    common::swap(data, lo, pos);

    (pos, ops)
}

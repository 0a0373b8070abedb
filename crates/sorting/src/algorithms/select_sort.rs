use crate::{Direction, SortError};

use super::common;

/// Selection sort over the inclusive range `[lo, hi]`.
///
/// Every element examined while scanning for a minimum counts as one basic
/// operation. The descending variant walks its outer index from `hi` down to
/// index 1 rather than down to `lo`; for `lo <= 1` this matches the classic
/// formulation exactly (with `lo == 1` it performs one extra single-element
/// scan), and for `lo > 1` the walk stops at `lo` since the scan range would
/// otherwise be empty.
pub fn select_sort(
    data: &mut [i32],
    lo: usize,
    hi: usize,
    direction: Direction,
) -> Result<u64, SortError> {
    common::check_range(data, lo, hi)?;

    let mut ops = 0;
    match direction {
        Direction::Ascending => {
            for i in lo..hi {
                let min = min_index(data, i, hi, &mut ops);
                common::swap(data, i, min);
            }
        }
        Direction::Descending => {
            for i in (lo.max(1)..=hi).rev() {
                let min = min_index(data, lo, i, &mut ops);
                common::swap(data, i, min);
            }
        }
    }

    Ok(ops)
}

/// Index of the first minimum in `[lo, hi]`, charging one operation per
/// element examined (the scan includes `lo` itself).
fn min_index(data: &[i32], lo: usize, hi: usize, ops: &mut u64) -> usize {
    let mut min = lo;
    for i in lo..=hi {
        *ops += 1;
        if data[i] < data[min] {
            min = i;
        }
    }
    min
}

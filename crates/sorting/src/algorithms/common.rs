use crate::SortError;

/// Stack headroom kept free before a recursive call grows onto a new segment.
pub(crate) const STACK_RED_ZONE_BYTES: usize = 64 * 1024;
pub(crate) const STACK_GROW_BYTES: usize = 1024 * 1024;

/// Exchanges the values stored at `a` and `b`.
#[inline]
pub fn swap(data: &mut [i32], a: usize, b: usize) {
    data.swap(a, b);
}

/// Checks the inclusive range `[lo, hi]` against `data`.
#[inline]
pub fn check_range(data: &[i32], lo: usize, hi: usize) -> Result<(), SortError> {
    if lo > hi || hi >= data.len() {
        return Err(SortError::InvalidRange {
            lo,
            hi,
            len: data.len(),
        });
    }
    Ok(())
}

/// Panicking twin of [`check_range`] for the recursive primitives.
#[inline]
#[track_caller]
pub(crate) fn assert_range(data: &[i32], lo: usize, hi: usize) {
    assert!(
        lo <= hi && hi < data.len(),
        "invalid range [{lo}, {hi}] for slice of length {}",
        data.len()
    );
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[inline]
pub fn is_sorted_non_increasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] >= w[1])
}

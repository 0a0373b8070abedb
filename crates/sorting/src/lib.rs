mod algorithms;
mod error;

pub use algorithms::common::{is_sorted_non_decreasing, is_sorted_non_increasing, swap};
pub use algorithms::merge_sort::{merge, merge_sort};
pub use algorithms::pivot::{ALL_PIVOTS, PivotStrategy, pivot_name};
pub use algorithms::quick_sort::{QuickSortRun, partition, quicksort, quicksort_run};
pub use algorithms::select_sort::select_sort;
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortMethod {
    SelectSort,
    /// Descending selection sort.
    SelectSortInv,
    MergeSort,
    Quicksort(PivotStrategy),
}

pub const ALL_METHODS: [SortMethod; 6] = [
    SortMethod::SelectSort,
    SortMethod::SelectSortInv,
    SortMethod::MergeSort,
    SortMethod::Quicksort(PivotStrategy::First),
    SortMethod::Quicksort(PivotStrategy::Average),
    SortMethod::Quicksort(PivotStrategy::MedianOfThree),
];

pub fn all_methods() -> &'static [SortMethod] {
    &ALL_METHODS
}

pub fn method_name(method: SortMethod) -> &'static str {
    match method {
        SortMethod::SelectSort => "select_sort",
        SortMethod::SelectSortInv => "select_sort_inv",
        SortMethod::MergeSort => "merge_sort",
        SortMethod::Quicksort(PivotStrategy::First) => "quicksort_first",
        SortMethod::Quicksort(PivotStrategy::Average) => "quicksort_average",
        SortMethod::Quicksort(PivotStrategy::MedianOfThree) => "quicksort_median3",
    }
}

pub fn method_from_name(name: &str) -> Option<SortMethod> {
    all_methods()
        .iter()
        .copied()
        .find(|&method| method_name(method) == name)
}

/// Whether `method` leaves its range in non-decreasing order.
pub fn is_ascending(method: SortMethod) -> bool {
    method != SortMethod::SelectSortInv
}

/// Sorts `data[lo..=hi]` with `method` and returns the operation count.
///
/// Unlike the primitives it dispatches to, an invalid range is reported as
/// [`SortError::InvalidRange`] instead of panicking.
pub fn sort_range(
    method: SortMethod,
    data: &mut [i32],
    lo: usize,
    hi: usize,
) -> Result<u64, SortError> {
    algorithms::common::check_range(data, lo, hi)?;
    log::trace!("{} over [{lo}, {hi}]", method_name(method));

    match method {
        SortMethod::SelectSort => select_sort(data, lo, hi, Direction::Ascending),
        SortMethod::SelectSortInv => select_sort(data, lo, hi, Direction::Descending),
        SortMethod::MergeSort => merge_sort(data, lo, hi),
        SortMethod::Quicksort(pivot) => Ok(quicksort(data, lo, hi, pivot)),
    }
}

/// Sorts the whole slice. An empty slice costs nothing.
pub fn sort(method: SortMethod, data: &mut [i32]) -> Result<u64, SortError> {
    if data.is_empty() {
        return Ok(0);
    }
    sort_range(method, data, 0, data.len() - 1)
}

pub mod common;
pub mod merge_sort;
pub mod pivot;
pub mod quick_sort;
pub mod select_sort;

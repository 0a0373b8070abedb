use std::io;
use std::path::PathBuf;

use dictionary::{DictionaryError, SearchError};
use sorting::SortError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimingError {
    #[error("invalid problem size {n}: expected 1..={max}")]
    InvalidSize { n: usize, max: usize },
    #[error("invalid size range: min {min}, max {max}, step {step}")]
    InvalidSizeRange { min: usize, max: usize, step: usize },
    #[error("at least one repetition is required")]
    InvalidRepetitions,
    #[error("{n} keys over {n_times} repetitions is too many searches")]
    TooManySearches { n: usize, n_times: usize },
    #[error("search key {key} is missing from the dictionary")]
    MissingKey { key: i32 },
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("failed to write time table to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

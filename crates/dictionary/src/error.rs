use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DictionaryError {
    #[error("a dictionary needs a non-zero initial capacity")]
    ZeroCapacity,
    #[error("failed to grow the dictionary table to {requested} keys")]
    Alloc { requested: usize },
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SearchError {
    #[error("key {key} not found")]
    NotFound { key: i32 },
    #[error("invalid search range [{first}, {last}] for a table of {len} keys")]
    InvalidRange { first: usize, last: usize, len: usize },
    #[error("self-organizing search would reorder a sorted dictionary")]
    ReordersSorted,
}

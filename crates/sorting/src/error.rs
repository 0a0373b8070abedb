use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    #[error("invalid range [{lo}, {hi}] for a table of {len} keys")]
    InvalidRange { lo: usize, hi: usize, len: usize },
    #[error("failed to allocate a merge buffer of {len} keys")]
    ScratchAlloc { len: usize },
}

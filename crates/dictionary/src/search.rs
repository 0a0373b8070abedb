use sorting::swap;

use crate::SearchError;

/// A successful lookup: where the key was found and what it cost.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hit {
    pub pos: usize,
    pub ops: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SearchMethod {
    Linear,
    /// Linear scan that moves every hit one slot towards the front.
    SelfOrganizing,
    /// Bisection; only meaningful on a sorted table.
    Binary,
}

pub const ALL_SEARCH_METHODS: [SearchMethod; 3] = [
    SearchMethod::Linear,
    SearchMethod::SelfOrganizing,
    SearchMethod::Binary,
];

pub fn search_method_name(method: SearchMethod) -> &'static str {
    match method {
        SearchMethod::Linear => "linear",
        SearchMethod::SelfOrganizing => "self-organizing",
        SearchMethod::Binary => "binary",
    }
}

pub fn search_method_from_name(name: &str) -> Option<SearchMethod> {
    ALL_SEARCH_METHODS
        .iter()
        .copied()
        .find(|&method| search_method_name(method) == name)
}

impl SearchMethod {
    /// Looks `key` up in the inclusive range `table[first..=last]`.
    pub fn search(
        self,
        table: &mut [i32],
        first: usize,
        last: usize,
        key: i32,
    ) -> Result<Hit, SearchError> {
        match self {
            SearchMethod::Linear => lin_search(table, first, last, key),
            SearchMethod::SelfOrganizing => lin_auto_search(table, first, last, key),
            SearchMethod::Binary => bin_search(table, first, last, key),
        }
    }
}

fn check_range(table: &[i32], first: usize, last: usize) -> Result<(), SearchError> {
    if first > last || last >= table.len() {
        return Err(SearchError::InvalidRange {
            first,
            last,
            len: table.len(),
        });
    }
    Ok(())
}

/// Bisection over `[first, last]`.
///
/// Each probe charges one operation for the equality test and, when that
/// misses, a second one for the ordering test.
pub fn bin_search(table: &[i32], first: usize, last: usize, key: i32) -> Result<Hit, SearchError> {
    check_range(table, first, last)?;

    let (mut first, mut last) = (first, last);
    let mut ops = 0;
    while first <= last {
        let mid = first + (last - first) / 2;
        ops += 1;
        if table[mid] == key {
            return Ok(Hit { pos: mid, ops });
        }
        ops += 1;
        if key < table[mid] {
            if mid == first {
                break;
            }
            last = mid - 1;
        } else {
            first = mid + 1;
        }
    }

    Err(SearchError::NotFound { key })
}

/// Front-to-back scan of `[first, last]`, one operation per key compared.
pub fn lin_search(table: &[i32], first: usize, last: usize, key: i32) -> Result<Hit, SearchError> {
    check_range(table, first, last)?;

    let mut ops = 0;
    for pos in first..=last {
        ops += 1;
        if table[pos] == key {
            return Ok(Hit { pos, ops });
        }
    }

    Err(SearchError::NotFound { key })
}

/// Like [`lin_search`], but a hit past `first` is swapped with its
/// predecessor. The reported position is where the key was found, before
/// the swap.
pub fn lin_auto_search(
    table: &mut [i32],
    first: usize,
    last: usize,
    key: i32,
) -> Result<Hit, SearchError> {
    check_range(table, first, last)?;

    let mut ops = 1;
    if table[first] == key {
        return Ok(Hit { pos: first, ops });
    }

    for pos in first + 1..=last {
        ops += 1;
        if table[pos] == key {
            swap(table, pos, pos - 1);
            return Ok(Hit { pos, ops });
        }
    }

    Err(SearchError::NotFound { key })
}

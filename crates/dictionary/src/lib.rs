mod error;
mod search;

pub use error::{DictionaryError, SearchError};
pub use search::{
    ALL_SEARCH_METHODS, Hit, SearchMethod, bin_search, lin_auto_search, lin_search,
    search_method_from_name, search_method_name,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    Sorted,
    Unsorted,
}

/// Growable table of integer keys.
///
/// - `len() <= capacity()` at all times.
/// - In [`Order::Sorted`] mode the keys stay in non-decreasing order.
/// - A full table grows to `floor(capacity * 1.1) + 1` before the next insert.
#[derive(Clone, Debug)]
pub struct Dictionary {
    table: Vec<i32>,
    size: usize,
    order: Order,
}

impl Dictionary {
    pub fn new(capacity: usize, order: Order) -> Result<Self, DictionaryError> {
        if capacity == 0 {
            return Err(DictionaryError::ZeroCapacity);
        }

        let mut table = Vec::new();
        table
            .try_reserve_exact(capacity)
            .map_err(|_| DictionaryError::Alloc {
                requested: capacity,
            })?;

        Ok(Self {
            table,
            size: capacity,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.size
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.table
    }

    /// Inserts `key` and returns the operations charged for it.
    ///
    /// Unsorted inserts append and charge one operation. Sorted inserts shift
    /// every larger key one slot to the right and charge nothing for it.
    pub fn insert(&mut self, key: i32) -> Result<u64, DictionaryError> {
        if self.table.len() == self.size {
            self.grow()?;
        }

        match self.order {
            Order::Unsorted => {
                self.table.push(key);
                Ok(1)
            }
            Order::Sorted => {
                self.table.push(key);
                let mut i = self.table.len() - 1;
                while i > 0 && self.table[i - 1] > key {
                    self.table[i] = self.table[i - 1];
                    i -= 1;
                }
                self.table[i] = key;
                Ok(0)
            }
        }
    }

    /// Inserts every key in order, summing their costs.
    ///
    /// Not atomic: on failure the keys before the failing one stay inserted.
    pub fn bulk_insert(&mut self, keys: &[i32]) -> Result<u64, DictionaryError> {
        let mut ops = 0;
        for &key in keys {
            ops += self.insert(key)?;
        }
        Ok(ops)
    }

    /// Looks `key` up among the stored keys with `method`.
    ///
    /// [`SearchMethod::SelfOrganizing`] reorders the table on a hit, so it is
    /// only allowed on [`Order::Unsorted`] dictionaries.
    pub fn search(&mut self, key: i32, method: SearchMethod) -> Result<Hit, SearchError> {
        if method == SearchMethod::SelfOrganizing && self.order == Order::Sorted {
            return Err(SearchError::ReordersSorted);
        }
        if self.table.is_empty() {
            return Err(SearchError::NotFound { key });
        }
        let last = self.table.len() - 1;
        method.search(&mut self.table, 0, last, key)
    }

    fn grow(&mut self) -> Result<(), DictionaryError> {
        // floor(size * 1.1) + 1
        let requested = self.size + self.size / 10 + 1;
        self.table
            .try_reserve_exact(requested - self.table.len())
            .map_err(|_| DictionaryError::Alloc { requested })?;
        log::debug!("dictionary grew from {} to {requested} slots", self.size);
        self.size = requested;
        Ok(())
    }
}

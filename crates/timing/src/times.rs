use std::path::Path;
use std::time::{Duration, Instant};

use dictionary::{Dictionary, Order, SearchError, SearchMethod};
use rand::Rng;
use sorting::{SortMethod, method_name, sort_range};

use crate::TimingError;
use crate::keys::KeyGenerator;
use crate::permutations::{generate_perm, generate_permutations};
use crate::table::save_time_table;

/// Largest problem size; keys are the `i32` values `1..=n`.
pub const MAX_SIZE: usize = i32::MAX as usize;

/// Aggregated measurements for one problem size.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRecord {
    pub n: usize,
    /// Number of calls measured.
    pub n_elems: usize,
    /// Mean wall-clock time per call, in nanoseconds.
    pub time: f64,
    pub average_ops: f64,
    pub min_ops: u64,
    pub max_ops: u64,
}

/// Problem sizes `min, min + step, …` up to and including `max`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl SizeRange {
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.min == 0 || self.min > self.max || self.step == 0 || self.max > MAX_SIZE {
            return Err(TimingError::InvalidSizeRange {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    pub fn sizes(self) -> impl Iterator<Item = usize> {
        (self.min..=self.max).step_by(self.step.max(1))
    }
}

#[derive(Default)]
struct Tally {
    calls: usize,
    total_ops: u64,
    min_ops: Option<u64>,
    max_ops: u64,
    elapsed: Duration,
}

impl Tally {
    fn record(&mut self, ops: u64, elapsed: Duration) {
        self.calls += 1;
        self.total_ops += ops;
        self.min_ops = Some(self.min_ops.map_or(ops, |min| min.min(ops)));
        self.max_ops = self.max_ops.max(ops);
        self.elapsed += elapsed;
    }

    fn finish(self, n: usize) -> TimeRecord {
        let calls = self.calls.max(1) as f64;
        TimeRecord {
            n,
            n_elems: self.calls,
            time: self.elapsed.as_secs_f64() * 1e9 / calls,
            average_ops: self.total_ops as f64 / calls,
            min_ops: self.min_ops.unwrap_or(0),
            max_ops: self.max_ops,
        }
    }
}

fn check_size(n: usize) -> Result<(), TimingError> {
    if n == 0 || n > MAX_SIZE {
        return Err(TimingError::InvalidSize { n, max: MAX_SIZE });
    }
    Ok(())
}

/// Sorts `n_perms` random permutations of `1..=n` with `method`.
pub fn average_sorting_time<R: Rng + ?Sized>(
    rng: &mut R,
    method: SortMethod,
    n_perms: usize,
    n: usize,
) -> Result<TimeRecord, TimingError> {
    check_size(n)?;
    if n_perms == 0 {
        return Err(TimingError::InvalidRepetitions);
    }

    let mut tally = Tally::default();
    for mut perm in generate_permutations(rng, n_perms, n) {
        let start = Instant::now();
        let ops = sort_range(method, &mut perm, 0, n - 1)?;
        let elapsed = start.elapsed();
        log::trace!("{} n={n} ops={ops} elapsed={elapsed:?}", method_name(method));
        tally.record(ops, elapsed);
    }

    Ok(tally.finish(n))
}

/// Runs [`average_sorting_time`] for every size in `sizes` and saves the
/// table to `path`.
pub fn generate_sorting_times<R: Rng + ?Sized>(
    rng: &mut R,
    method: SortMethod,
    path: &Path,
    sizes: SizeRange,
    n_perms: usize,
) -> Result<Vec<TimeRecord>, TimingError> {
    sizes.validate()?;
    if n_perms == 0 {
        return Err(TimingError::InvalidRepetitions);
    }

    let mut records = Vec::new();
    for n in sizes.sizes() {
        let record = average_sorting_time(rng, method, n_perms, n)?;
        log::debug!(
            "{} n={n} avg_ops={:.2} time={:.2}ns",
            method_name(method),
            record.average_ops,
            record.time
        );
        records.push(record);
    }

    save_time_table(path, &records)?;
    Ok(records)
}

/// Fills a dictionary with a random permutation of `1..=n`, then times one
/// search per generated key, `n * n_times` keys in total.
pub fn average_search_time<R: Rng + ?Sized>(
    rng: &mut R,
    method: SearchMethod,
    generator: KeyGenerator,
    order: Order,
    n: usize,
    n_times: usize,
) -> Result<TimeRecord, TimingError> {
    check_size(n)?;
    if n_times == 0 {
        return Err(TimingError::InvalidRepetitions);
    }
    let n_keys = n
        .checked_mul(n_times)
        .ok_or(TimingError::TooManySearches { n, n_times })?;

    let mut dict = Dictionary::new(n, order)?;
    dict.bulk_insert(&generate_perm(rng, n))?;
    let keys = generator.generate(rng, n_keys, n);

    let mut tally = Tally::default();
    for key in keys {
        let start = Instant::now();
        let hit = match dict.search(key, method) {
            Ok(hit) => hit,
            Err(SearchError::NotFound { key }) => {
                log::warn!("key {key} missing from a dictionary of {n} keys");
                return Err(TimingError::MissingKey { key });
            }
            Err(err) => return Err(err.into()),
        };
        tally.record(hit.ops, start.elapsed());
    }

    Ok(tally.finish(n))
}

/// Runs [`average_search_time`] for every size in `sizes` and saves the
/// table to `path`.
pub fn generate_search_times<R: Rng + ?Sized>(
    rng: &mut R,
    method: SearchMethod,
    generator: KeyGenerator,
    order: Order,
    path: &Path,
    sizes: SizeRange,
    n_times: usize,
) -> Result<Vec<TimeRecord>, TimingError> {
    sizes.validate()?;
    if n_times == 0 {
        return Err(TimingError::InvalidRepetitions);
    }

    let mut records = Vec::new();
    for n in sizes.sizes() {
        let record = average_search_time(rng, method, generator, order, n, n_times)?;
        log::debug!(
            "{} n={n} avg_ops={:.2} time={:.2}ns",
            dictionary::search_method_name(method),
            record.average_ops,
            record.time
        );
        records.push(record);
    }

    save_time_table(path, &records)?;
    Ok(records)
}

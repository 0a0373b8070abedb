pub mod cli;
mod error;
mod keys;
mod permutations;
mod table;
mod times;

use anyhow::Context;
use dictionary::search_method_name;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorting::method_name;

pub use error::TimingError;
pub use keys::{ALL_KEY_GENERATORS, KeyGenerator, key_generator_from_name, key_generator_name};
pub use permutations::{generate_perm, generate_permutations, random_num};
pub use table::{save_time_table, write_time_table};
pub use times::{
    MAX_SIZE, SizeRange, TimeRecord, average_search_time, average_sorting_time,
    generate_search_times, generate_sorting_times,
};

use crate::cli::{Config, Experiment};

/// Runs the experiment described by `config` and returns its table rows.
pub fn handle_config(config: &Config) -> anyhow::Result<Vec<TimeRecord>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    log::info!(
        "seed {:#x}, sizes {}..={} step {}, {} reps",
        config.seed,
        config.sizes.min,
        config.sizes.max,
        config.sizes.step,
        config.reps
    );

    match config.experiment {
        Experiment::Sort { method } => generate_sorting_times(
            &mut rng,
            method,
            &config.output,
            config.sizes,
            config.reps,
        )
        .with_context(|| format!("timing {} failed", method_name(method))),
        Experiment::Search {
            method,
            keys,
            order,
        } => generate_search_times(
            &mut rng,
            method,
            keys,
            order,
            &config.output,
            config.sizes,
            config.reps,
        )
        .with_context(|| {
            format!(
                "timing {} search with {} keys failed",
                search_method_name(method),
                key_generator_name(keys)
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use dictionary::{Order, SearchMethod};
    use sorting::SortMethod;

    use super::*;

    fn config(experiment: Experiment, output: std::path::PathBuf) -> Config {
        Config {
            experiment,
            output,
            sizes: SizeRange {
                min: 8,
                max: 24,
                step: 8,
            },
            reps: 2,
            seed: cli::DEFAULT_SEED,
            verbosity: 0,
        }
    }

    #[test]
    fn same_seed_same_operation_counts() {
        let dir = tempfile::tempdir().unwrap();
        let experiment = Experiment::Sort {
            method: SortMethod::Quicksort(sorting::PivotStrategy::Average),
        };
        let a = handle_config(&config(experiment, dir.path().join("a.txt"))).unwrap();
        let b = handle_config(&config(experiment, dir.path().join("b.txt"))).unwrap();

        let ops = |records: &[TimeRecord]| {
            records
                .iter()
                .map(|r| (r.n, r.min_ops, r.max_ops))
                .collect::<Vec<_>>()
        };
        assert_eq!(ops(&a), ops(&b));
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn search_experiment_writes_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.txt");
        let experiment = Experiment::Search {
            method: SearchMethod::Linear,
            keys: KeyGenerator::Uniform,
            order: Order::Unsorted,
        };
        let records = handle_config(&config(experiment, path.clone())).unwrap();
        assert_eq!(records.len(), 3);
        assert!(path.exists());
    }

    #[test]
    fn errors_carry_context() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(
            Experiment::Sort {
                method: SortMethod::MergeSort,
            },
            dir.path().join("x.txt"),
        );
        config.reps = 0;
        let err = handle_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "timing merge_sort failed");
        assert!(matches!(
            err.downcast_ref::<TimingError>(),
            Some(TimingError::InvalidRepetitions)
        ));
    }
}

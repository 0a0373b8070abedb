use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::measurement::Measurement;
use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sorting::{SortMethod, all_methods, method_name, sort};

const BENCH_SIZES: [usize; 4] = [256, 1024, 4096, 16384];
const QUADRATIC_MAX_SIZE: usize = 4096;
const BENCH_SAMPLE_SIZE: usize = 10;
const BENCH_WARMUP_MS: u64 = 80;
const BENCH_MEASURE_MS_SMALL: u64 = 120;
const BENCH_MEASURE_MS_LARGE: u64 = 300;

#[derive(Clone, Copy)]
enum Distribution {
    Permutation,
    Sorted,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::Permutation => "permutation",
            Self::Sorted => "sorted",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 2] = [Distribution::Permutation, Distribution::Sorted];

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &method in all_methods() {
            for &size in &BENCH_SIZES {
                if !is_benchmark_target(method, dist, size) {
                    continue;
                }
                apply_runtime(&mut group, size);
                let base = generate_dataset(dist, size, seed_for(dist, size));

                group.bench_function(BenchmarkId::new(method_name(method), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            let ops = sort(method, &mut data);
                            total += start.elapsed();
                            black_box((ops, &data));
                        }
                        total
                    });
                });
            }
        }

        group.finish();
    }
}

/// Quadratic cases are capped so a full run stays short.
#[inline]
fn is_benchmark_target(method: SortMethod, dist: Distribution, size: usize) -> bool {
    let quadratic = match method {
        SortMethod::SelectSort | SortMethod::SelectSortInv => true,
        SortMethod::Quicksort(sorting::PivotStrategy::First) => {
            matches!(dist, Distribution::Sorted)
        }
        _ => false,
    };
    !quadratic || size <= QUADRATIC_MAX_SIZE
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(BENCH_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(BENCH_WARMUP_MS));
    if size <= 1024 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_SMALL));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_LARGE));
    }
}

fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<i32> {
    let mut data: Vec<i32> = (1..=size as i32).collect();
    if let Distribution::Permutation = dist {
        let mut rng = StdRng::seed_from_u64(seed);
        data.shuffle(&mut rng);
        // A few random overwrites keep duplicate keys in play.
        for _ in 0..size / 100 {
            let i = rng.random_range(0..size);
            data[i] = rng.random_range(1..=size as i32);
        }
    }
    data
}

#[inline]
fn seed_for(dist: Distribution, size: usize) -> u64 {
    let d = match dist {
        Distribution::Permutation => 11_u64,
        Distribution::Sorted => 12_u64,
    };
    0x5EED_2026 ^ (d << 48) ^ (size as u64)
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);

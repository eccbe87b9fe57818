//! Benchmark driver sweeping the configured matrix.
//!
//! For every input size the driver:
//! 1. Generates a fresh dataset
//! 2. Times the linear reducer once
//! 3. Times the mutex reducer once per thread count
//! 4. Times the compare-and-swap reducer once per thread count
//!
//! Each run is handed to an observer as soon as it is measured, so long sweeps
//! report progressively. Parallel results are cross-checked against the linear
//! baseline of the same dataset; disagreements are logged and counted, never
//! corrected.

use crate::aggregate::Aggregate;
use crate::config::{Config, ConfigError};
use crate::dataset;
use crate::strategy::Strategy;
use std::time::{Duration, Instant};

/// One timed run of one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Length of the dataset.
    pub size: usize,
    /// Worker count; `None` for the linear strategy.
    pub threads: Option<usize>,
    /// Which reducer ran.
    pub strategy: Strategy,
    /// Wall-clock time of the reducer call.
    pub elapsed: Duration,
    /// What the reducer returned.
    pub aggregate: Aggregate,
}

/// Everything a sweep produced.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSummary {
    /// Every measurement, in the order it was taken.
    pub measurements: Vec<Measurement>,
    /// Number of parallel runs that disagreed with their linear baseline.
    pub mismatches: usize,
}

/// Runs `strategy` once and measures it.
#[must_use]
pub fn measure(strategy: Strategy, data: &[i32], threads: Option<usize>) -> Measurement {
    let start = Instant::now();
    let aggregate = strategy.reduce(data, threads.unwrap_or(1));
    let elapsed = start.elapsed();
    Measurement {
        size: data.len(),
        threads,
        strategy,
        elapsed,
        aggregate,
    }
}

/// Sweeps the whole matrix described by `config`.
///
/// `observe` is called with each measurement right after it is taken.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration does not validate; nothing
/// is run in that case.
pub fn run<F>(config: &Config, mut observe: F) -> Result<BenchmarkSummary, ConfigError>
where
    F: FnMut(&Measurement),
{
    config.validate()?;

    let mut summary = BenchmarkSummary {
        measurements: Vec::with_capacity(config.sizes.len() * (1 + 2 * config.threads.len())),
        mismatches: 0,
    };

    for (index, &size) in config.sizes.iter().enumerate() {
        let mut rng = match config.seed {
            Some(seed) => dataset::seeded(seed.wrapping_add(index as u64)),
            None => dataset::from_clock(),
        };
        let data = dataset::generate(&mut rng, size);

        let baseline = measure(Strategy::Linear, &data, None);
        observe(&baseline);
        summary.measurements.push(baseline);

        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_parallel()) {
            for &threads in &config.threads {
                let m = measure(strategy, &data, Some(threads));
                if m.aggregate != baseline.aggregate {
                    libc_print::libc_eprintln!(
                        "[reducebench] warning: {} with {} threads on {} elements returned {:?}, linear returned {:?}",
                        strategy,
                        threads,
                        size,
                        m.aggregate,
                        baseline.aggregate
                    );
                    summary.mismatches += 1;
                }
                observe(&m);
                summary.measurements.push(m);
            }
        }
    }

    Ok(summary)
}

//! Reducebench: a harness comparing lock-based and lock-free parallel reductions.
//!
//! This crate computes one aggregate, the number of multiples of 5 in a dataset
//! together with the largest of them, three different ways:
//!
//! - [`linear::reduce`] scans the dataset on the calling thread.
//! - [`locked::reduce`] splits the dataset across worker threads that merge
//!   their partial results under a single [`std::sync::Mutex`].
//! - [`lock_free::reduce`] uses the same split but merges through an atomic
//!   `fetch_add` and a compare-and-swap retry loop.
//!
//! The [`driver`] sweeps a [`Config`] matrix of input sizes and thread counts,
//! timing every run and cross-checking each parallel result against the linear
//! baseline.
//!
//! # Usage
//!
//! ```
//! use reducebench::{Aggregate, Strategy};
//!
//! let data = [5, 3, 10, 22, 25, 7];
//! for strategy in Strategy::ALL {
//!     let result = strategy.reduce(&data, 3);
//!     assert_eq!(result, Aggregate { count: 3, max: Some(25) });
//! }
//! ```
//!
//! Or sweep a whole matrix:
//!
//! ```
//! use reducebench::{driver, Config};
//!
//! let config = Config {
//!     sizes: vec![1_000],
//!     threads: vec![1, 4],
//!     seed: Some(7),
//! };
//! let summary = driver::run(&config, |_| {}).unwrap();
//! assert_eq!(summary.measurements.len(), 5);
//! assert_eq!(summary.mismatches, 0);
//! ```

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod json_output;
pub mod linear;
pub mod lock_free;
mod lock_util;
pub mod locked;
pub mod partition;
pub mod report;
pub mod strategy;

pub use aggregate::Aggregate;
pub use config::{Config, ConfigError};
pub use driver::{BenchmarkSummary, Measurement};
pub use strategy::Strategy;

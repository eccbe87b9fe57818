//! Benchmark matrix configuration.

use serde::Serialize;
use std::fmt;

/// Input sizes swept when nothing else is configured.
pub const DEFAULT_SIZES: [usize; 4] = [10_000, 1_000_000, 100_000_000, 2_000_000_000];

/// Thread counts swept when nothing else is configured.
pub const DEFAULT_THREADS: [usize; 6] = [8, 16, 32, 64, 128, 256];

/// The (input size x thread count) matrix the driver sweeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Dataset lengths, in sweep order.
    pub sizes: Vec<usize>,
    /// Worker counts for the parallel strategies, in sweep order.
    pub threads: Vec<usize>,
    /// Seed for dataset generation. `None` reseeds from the clock per size.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            threads: DEFAULT_THREADS.to_vec(),
            seed: None,
        }
    }
}

impl Config {
    /// Checks that the matrix is runnable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either list is empty or a thread count is
    /// zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if self.threads.is_empty() {
            return Err(ConfigError::NoThreadCounts);
        }
        if let Some(index) = self.threads.iter().position(|&t| t == 0) {
            return Err(ConfigError::ZeroThreads { index });
        }
        Ok(())
    }
}

/// Errors reported by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The size list is empty.
    NoSizes,
    /// The thread count list is empty.
    NoThreadCounts,
    /// A thread count of zero was given.
    ZeroThreads {
        /// Position of the offending entry in the thread list.
        index: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSizes => write!(f, "[reducebench] at least one input size is required"),
            Self::NoThreadCounts => {
                write!(f, "[reducebench] at least one thread count is required")
            }
            Self::ZeroThreads { index } => write!(
                f,
                "[reducebench] thread count at position {index} is 0; every count must be at least 1"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

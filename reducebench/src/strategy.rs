//! The three reduction strategies under comparison.

use crate::aggregate::Aggregate;
use crate::{linear, lock_free, locked};
use serde::Serialize;
use std::fmt;

/// Which reducer a measurement was taken with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    /// Single-threaded scan.
    Linear,
    /// Worker threads merging under a mutex.
    #[serde(rename = "Mutex")]
    Locked,
    /// Worker threads merging with `fetch_add` and compare-and-swap.
    #[serde(rename = "CAS")]
    LockFree,
}

impl Strategy {
    /// Every strategy, in report order.
    pub const ALL: [Self; 3] = [Self::Linear, Self::Locked, Self::LockFree];

    /// Label printed in the `Mode` column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Locked => "Mutex",
            Self::LockFree => "CAS",
        }
    }

    /// Returns true for the strategies that take a thread count.
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// Runs this strategy over `data`.
    ///
    /// `threads` is ignored by [`Strategy::Linear`].
    ///
    /// # Panics
    ///
    /// Parallel strategies panic if `threads` is zero.
    #[must_use]
    pub fn reduce(self, data: &[i32], threads: usize) -> Aggregate {
        match self {
            Self::Linear => linear::reduce(data),
            Self::Locked => locked::reduce(data, threads),
            Self::LockFree => lock_free::reduce(data, threads),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

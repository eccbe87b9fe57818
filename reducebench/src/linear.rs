//! Single-threaded baseline reducer.

use crate::aggregate::Aggregate;

/// Scans the whole dataset on the calling thread.
#[must_use]
pub fn reduce(data: &[i32]) -> Aggregate {
    Aggregate::scan(data)
}

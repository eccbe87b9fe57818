//! Parallel reducer merging partial results without a lock.
//!
//! Workers scan their partitions exactly like the lock-based reducer. The merge
//! is split into two independent atomic updates:
//!
//! - the partial count is added with a single `fetch_add`;
//! - the partial max is raised with a compare-and-swap retry loop
//!   ([`raise_max`]).
//!
//! Nothing else is published through these atomics, so every operation uses
//! [`Ordering::Relaxed`]. The two fields are not updated together; they are
//! only read after all workers have been joined.

use crate::aggregate::Aggregate;
use crate::partition::partitions;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::thread;

/// Value of the shared max before any worker has merged.
pub const SENTINEL: i32 = i32::MIN;

/// Raises `shared` to `candidate` if `candidate` is larger.
///
/// Returns the number of failed exchange attempts. The loop ends because every
/// competing success strictly increases `shared`, and there are finitely many
/// candidates; a candidate that does not exceed the current value never
/// attempts the exchange at all.
#[inline]
pub fn raise_max(shared: &AtomicI32, candidate: i32) -> usize {
    let mut retries = 0;
    let mut current = shared.load(Ordering::Relaxed);
    while candidate > current {
        match shared.compare_exchange_weak(current, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => break,
            Err(observed) => {
                current = observed;
                retries += 1;
            }
        }
    }
    retries
}

/// Reduces `data` with `threads` scoped workers and atomic accumulators.
///
/// # Panics
///
/// Panics if `threads` is zero, if a worker thread cannot be spawned, or if a
/// worker panics.
#[must_use]
pub fn reduce(data: &[i32], threads: usize) -> Aggregate {
    let count = AtomicUsize::new(0);
    let max = AtomicI32::new(SENTINEL);

    thread::scope(|s| {
        for range in partitions(data.len(), threads) {
            let chunk = &data[range];
            let (count, max) = (&count, &max);
            s.spawn(move || {
                let local = Aggregate::scan(chunk);
                count.fetch_add(local.count, Ordering::Relaxed);
                if let Some(local_max) = local.max {
                    raise_max(max, local_max);
                }
            });
        }
    });

    let count = count.into_inner();
    Aggregate {
        count,
        max: (count > 0).then(|| max.into_inner()),
    }
}

//! Parallel reducer merging partial results under a mutex.
//!
//! Each worker scans its own partition without any synchronization, then takes
//! the single shared lock exactly once to fold its partial aggregate into the
//! shared one. The critical section is the merge only, so there are `threads`
//! lock acquisitions no matter how large the dataset is.

use crate::aggregate::Aggregate;
use crate::lock_util::{recover_inner, recover_lock};
use crate::partition::partitions;
use std::sync::Mutex;
use std::thread;

/// Reduces `data` with `threads` scoped workers and a shared [`Mutex`].
///
/// # Panics
///
/// Panics if `threads` is zero, if a worker thread cannot be spawned, or if a
/// worker panics.
#[must_use]
pub fn reduce(data: &[i32], threads: usize) -> Aggregate {
    reduce_with(data, threads, merge_locked)
}

/// Folds one worker's partial aggregate into the shared one.
///
/// A lock poisoned by another worker's panic is recovered; that panic still
/// surfaces when the scope joins.
fn merge_locked(shared: &Mutex<Aggregate>, local: Aggregate) {
    recover_lock(shared.lock()).merge(local);
}

fn reduce_with<M>(data: &[i32], threads: usize, merge: M) -> Aggregate
where
    M: Fn(&Mutex<Aggregate>, Aggregate) + Sync,
{
    let shared = Mutex::new(Aggregate::EMPTY);

    thread::scope(|s| {
        for range in partitions(data.len(), threads) {
            let chunk = &data[range];
            let (shared, merge) = (&shared, &merge);
            s.spawn(move || merge(shared, Aggregate::scan(chunk)));
        }
    });

    recover_inner(shared.into_inner())
}

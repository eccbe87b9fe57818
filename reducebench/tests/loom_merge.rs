//! Loom exhaustive concurrency tests for the lock-free merge.
//!
//! These tests use the Loom model checker to explore every interleaving of the
//! count `fetch_add` and the compare-and-swap max loop, verifying that no
//! update is lost.
//!
//! Run with: cargo test --test loom_merge --release
//!
//! Loom tests are computationally expensive. The tests here use at most three
//! threads to keep the state space manageable.

use loom::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use loom::sync::Arc;
use loom::thread;

/// Mirrors `reducebench::lock_free::raise_max` using loom atomics.
///
/// `compare_exchange` stands in for the weak variant; loom does not model
/// spurious failures.
fn raise_max(shared: &AtomicI32, candidate: i32) {
    let mut current = shared.load(Ordering::Relaxed);
    while candidate > current {
        match shared.compare_exchange(current, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(observed) => current = observed,
        }
    }
}

/// Mirrors the per-worker merge of the lock-free reducer.
fn merge(count: &AtomicUsize, max: &AtomicI32, local_count: usize, local_max: Option<i32>) {
    count.fetch_add(local_count, Ordering::Relaxed);
    if let Some(local_max) = local_max {
        raise_max(max, local_max);
    }
}

/// Two workers with different maxima: the larger always wins.
#[test]
fn loom_two_workers_larger_wins() {
    loom::model(|| {
        let count = Arc::new(AtomicUsize::new(0));
        let max = Arc::new(AtomicI32::new(i32::MIN));

        let handles: Vec<_> = [(2, Some(10)), (3, Some(25))]
            .into_iter()
            .map(|(c, m)| {
                let count = Arc::clone(&count);
                let max = Arc::clone(&max);
                thread::spawn(move || merge(&count, &max, c, m))
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(count.load(Ordering::Relaxed), 5);
        assert_eq!(max.load(Ordering::Relaxed), 25);
    });
}

/// Three workers racing, one of them with an empty partition.
#[test]
fn loom_three_workers_with_empty_partition() {
    loom::model(|| {
        let count = Arc::new(AtomicUsize::new(0));
        let max = Arc::new(AtomicI32::new(i32::MIN));

        let handles: Vec<_> = [(1, Some(5)), (0, None), (4, Some(15))]
            .into_iter()
            .map(|(c, m)| {
                let count = Arc::clone(&count);
                let max = Arc::clone(&max);
                thread::spawn(move || merge(&count, &max, c, m))
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(count.load(Ordering::Relaxed), 5);
        assert_eq!(max.load(Ordering::Relaxed), 15);
    });
}

/// Equal candidates: the max is set once and never regresses.
#[test]
fn loom_equal_candidates() {
    loom::model(|| {
        let max = Arc::new(AtomicI32::new(i32::MIN));

        let t1 = {
            let max = Arc::clone(&max);
            thread::spawn(move || raise_max(&max, 100))
        };
        let t2 = {
            let max = Arc::clone(&max);
            thread::spawn(move || raise_max(&max, 100))
        };

        raise_max(&max, 50);

        t1.join().unwrap();
        t2.join().unwrap();

        assert_eq!(max.load(Ordering::Relaxed), 100);
    });
}

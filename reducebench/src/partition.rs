//! Splitting a dataset into per-worker index ranges.

use std::ops::Range;

/// Splits `0..len` into `threads` contiguous half-open ranges.
///
/// Every range but the last has `len / threads` elements; the last one absorbs
/// the remainder. When `len < threads` the leading ranges are empty and the
/// last covers everything.
///
/// # Panics
///
/// Panics if `threads` is zero.
#[must_use]
pub fn partitions(len: usize, threads: usize) -> Vec<Range<usize>> {
    assert!(threads > 0, "thread count must be at least 1");
    let chunk = len / threads;
    (0..threads)
        .map(|t| {
            let start = t * chunk;
            let end = if t == threads - 1 { len } else { start + chunk };
            start..end
        })
        .collect()
}

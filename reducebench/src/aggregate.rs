//! The aggregate every reducer computes.
//!
//! An [`Aggregate`] counts the elements divisible by 5 and remembers the
//! largest of them. `max` is `None` exactly when `count` is zero, so "nothing
//! qualified" is never confused with a qualifying value.

/// Count and maximum of the multiples of 5 seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    /// Number of elements divisible by 5.
    pub count: usize,
    /// Largest element divisible by 5, if any was seen.
    pub max: Option<i32>,
}

impl Aggregate {
    /// The aggregate of an empty dataset.
    pub const EMPTY: Self = Self {
        count: 0,
        max: None,
    };

    /// Scans `data` front to back.
    ///
    /// This is the loop shared by the linear reducer and by every worker of the
    /// parallel reducers.
    #[must_use]
    #[inline]
    pub fn scan(data: &[i32]) -> Self {
        let mut count = 0;
        let mut max = i32::MIN;
        for &value in data {
            if is_qualifying(value) {
                count += 1;
                if value > max {
                    max = value;
                }
            }
        }
        // i32::MIN is not a multiple of 5, so it only survives when count == 0.
        Self {
            count,
            max: (count > 0).then_some(max),
        }
    }

    /// Folds another partial aggregate into this one.
    ///
    /// Addition and max are commutative, so merge order never matters.
    #[inline]
    pub fn merge(&mut self, other: Self) {
        self.count += other.count;
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }
}

/// Returns true if `value` takes part in the aggregate.
#[inline]
#[must_use]
pub fn is_qualifying(value: i32) -> bool {
    value % 5 == 0
}

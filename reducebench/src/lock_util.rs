//! Recovering from poisoned locks.
//!
//! A lock is poisoned when a thread panics while holding it. The merge step of
//! the lock-based reducer only adds and compares integers, so the protected
//! aggregate is still consistent; we take the guard back and keep going. The
//! panic itself still surfaces when the worker scope is joined.

use std::sync::{LockResult, MutexGuard};

/// Returns the guard of a possibly poisoned mutex.
///
/// # Example
///
/// ```ignore
/// use std::sync::Mutex;
///
/// let lock = Mutex::new(Aggregate::EMPTY);
/// let mut guard = recover_lock(lock.lock());
/// guard.merge(local);
/// ```
pub(crate) fn recover_lock<T>(result: LockResult<MutexGuard<'_, T>>) -> MutexGuard<'_, T> {
    result.unwrap_or_else(|poison| {
        libc_print::libc_eprintln!("[reducebench] warning: recovering from poisoned lock");
        poison.into_inner()
    })
}

/// Takes the value out of a possibly poisoned mutex.
pub(crate) fn recover_inner<T>(result: LockResult<T>) -> T {
    result.unwrap_or_else(|poison| {
        libc_print::libc_eprintln!("[reducebench] warning: recovering from poisoned lock");
        poison.into_inner()
    })
}

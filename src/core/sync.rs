//! Lock helpers for poisoned mutexes and reader/writer locks
//!
//! Two flavours are provided. The `handle_rwlock_*` functions convert a
//! poisoned lock into a caller-supplied error so fallible APIs (`try_read`,
//! `try_write`) can report it. The `*_or_recover` functions log the poison
//! and hand back the guard anyway; the container data is still structurally
//! valid after a panicking closure, so infallible operations keep working.

use std::sync::{LockResult, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Turn a poisoned shared guard into a caller-defined error
///
/// # Examples
/// ```
/// use std::sync::RwLock;
/// use containerkit::core::sync::handle_rwlock_read;
/// use containerkit::containers::api::ContainerError;
///
/// let lock = RwLock::new(42);
/// let guard = handle_rwlock_read(lock.read(), |message| ContainerError::Poisoned { message })
///     .unwrap();
/// assert_eq!(*guard, 42);
/// ```
pub fn handle_rwlock_read<T, E>(
    result: LockResult<RwLockReadGuard<T>>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<RwLockReadGuard<T>, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "read lock poisoned: a writer panicked while holding it ({:?})",
            poison_err
        ))
    })
}

/// Turn a poisoned exclusive guard into a caller-defined error
pub fn handle_rwlock_write<T, E>(
    result: LockResult<RwLockWriteGuard<T>>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<RwLockWriteGuard<T>, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "write lock poisoned: a writer panicked while holding it ({:?})",
            poison_err
        ))
    })
}

/// Lock a mutex, logging and clearing poison instead of failing
pub fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::error!("{}: recovering poisoned mutex", context);
        poisoned.into_inner()
    })
}

/// Take a shared RwLock guard, logging and clearing poison instead of failing
pub fn read_or_recover<'a, T>(lock: &'a RwLock<T>, context: &str) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poisoned| {
        log::error!("{}: recovering poisoned read lock", context);
        poisoned.into_inner()
    })
}

/// Take an exclusive RwLock guard, logging and clearing poison instead of failing
pub fn write_or_recover<'a, T>(lock: &'a RwLock<T>, context: &str) -> RwLockWriteGuard<'a, T> {
    lock.write().unwrap_or_else(|poisoned| {
        log::error!("{}: recovering poisoned write lock", context);
        poisoned.into_inner()
    })
}

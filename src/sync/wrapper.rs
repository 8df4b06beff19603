use crate::containers::api::{
    Cancellable, CancelSignal, Container, ContainerError, ContainerResult, Enumerable,
    ForwardIterable, ReverseIterable, Unsynchronized,
};
use crate::queue::BlockingQueue;
use crate::core::sync::{handle_rwlock_read, handle_rwlock_write, read_or_recover, write_or_recover};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Shared handle to a container behind a reader/writer lock
///
/// Cloning the handle is cheap: clones share the same lock and the same
/// container.
pub struct ThreadSafe<C> {
    inner: Arc<RwLock<C>>,
}

impl<C: Unsynchronized> ThreadSafe<C> {
    pub fn new(container: C) -> Self {
        Self {
            inner: Arc::new(RwLock::new(container)),
        }
    }
}

impl<C> ThreadSafe<C> {
    /// True if both handles share the same container
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `f` under the shared lock
    ///
    /// A poisoned lock is logged and recovered.
    pub fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let guard = read_or_recover(&self.inner, "thread-safe container read");
        f(&guard)
    }

    /// Run `f` under the exclusive lock
    ///
    /// A poisoned lock is logged and recovered.
    pub fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = write_or_recover(&self.inner, "thread-safe container write");
        f(&mut guard)
    }

    /// Like [`read`](Self::read), but a poisoned lock is an error
    pub fn try_read<R>(&self, f: impl FnOnce(&C) -> R) -> ContainerResult<R> {
        let guard = handle_rwlock_read(self.inner.read(), |message| {
            ContainerError::Poisoned { message }
        })?;
        Ok(f(&guard))
    }

    /// Like [`write`](Self::write), but a poisoned lock is an error
    pub fn try_write<R>(&self, f: impl FnOnce(&mut C) -> R) -> ContainerResult<R> {
        let mut guard = handle_rwlock_write(self.inner.write(), |message| {
            ContainerError::Poisoned { message }
        })?;
        Ok(f(&mut guard))
    }
}

impl<C> Clone for ThreadSafe<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Container> ThreadSafe<C> {
    pub fn len(&self) -> usize {
        self.read(|container| container.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|container| container.is_empty())
    }

    pub fn clear(&self) {
        self.write(|container| container.clear());
    }
}

impl<C: Enumerable> ThreadSafe<C> {
    pub fn for_each<F>(&self, op: F)
    where
        F: FnMut(C::Key, &C::Value),
    {
        self.read(|container| container.for_each(op));
    }

    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.read(|container| container.any(predicate))
    }

    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.read(|container| container.all(predicate))
    }

    pub fn find<F>(&self, predicate: F) -> Option<(C::Key, C::Value)>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
        C::Value: Clone,
    {
        self.read(|container| container.find(predicate))
    }

    /// Snapshot of the keys, ending early once `signal` fires
    pub fn keys(&self, signal: CancelSignal) -> Cancellable<std::vec::IntoIter<C::Key>> {
        let keys: Vec<_> = self.read(|container| container.entries().map(|(key, _)| key).collect());
        Cancellable::new(keys.into_iter(), signal)
    }

    /// Snapshot of the values, ending early once `signal` fires
    pub fn values(&self, signal: CancelSignal) -> Cancellable<std::vec::IntoIter<C::Value>>
    where
        C::Value: Clone,
    {
        let values: Vec<_> = self.read(|container| {
            container
                .entries()
                .map(|(_, value)| value.clone())
                .collect()
        });
        Cancellable::new(values.into_iter(), signal)
    }

    /// Snapshot of the pairs, ending early once `signal` fires
    pub fn items(&self, signal: CancelSignal) -> Cancellable<std::vec::IntoIter<(C::Key, C::Value)>>
    where
        C::Value: Clone,
    {
        let items: Vec<_> = self.read(|container| {
            container
                .entries()
                .map(|(key, value)| (key, value.clone()))
                .collect()
        });
        Cancellable::new(items.into_iter(), signal)
    }
}

impl<C> ThreadSafe<C>
where
    C: ForwardIterable,
    C::Value: Clone,
{
    /// Front-to-back snapshot taken under the shared lock
    ///
    /// The lock is released before the iterator is returned; later
    /// mutations are not observed.
    pub fn iterator(&self) -> std::vec::IntoIter<(usize, C::Value)> {
        self.read(|container| {
            container
                .iter_forward()
                .map(|(index, value)| (index, value.clone()))
                .collect::<Vec<_>>()
        })
        .into_iter()
    }
}

impl<C> ThreadSafe<C>
where
    C: ReverseIterable,
    C::Value: Clone,
{
    /// Back-to-front snapshot taken under the shared lock
    pub fn iterator_reverse(&self) -> std::vec::IntoIter<(usize, C::Value)> {
        self.read(|container| {
            container
                .iter_reverse()
                .map(|(index, value)| (index, value.clone()))
                .collect::<Vec<_>>()
        })
        .into_iter()
    }
}

/// `[Concurrent]` followed by the inner container's own format
impl<C: fmt::Display> fmt::Display for ThreadSafe<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|container| write!(f, "[Concurrent]{}", container))
    }
}

impl<C: fmt::Debug> fmt::Debug for ThreadSafe<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|container| f.debug_tuple("ThreadSafe").field(container).finish())
    }
}

/// Conversion into a shareable handle that never nests locks
///
/// Every [`Unsynchronized`] container wraps itself in a fresh
/// [`ThreadSafe`] lock, and a [`ThreadSafe`] handle is returned unchanged.
/// A [`BlockingQueue`] is shared through an `Arc` instead: its own storage
/// mutex and permit pool already make it safe, and a push blocked under an
/// outer write lock would keep every consumer out.
pub trait MakeThreadSafe {
    type Shared;

    fn make_thread_safe(self) -> Self::Shared;

    /// True if the value is already safe to share
    fn is_synchronized(&self) -> bool;
}

impl<C: Container + Unsynchronized> MakeThreadSafe for C {
    type Shared = ThreadSafe<C>;

    fn make_thread_safe(self) -> ThreadSafe<C> {
        log::debug!("wrapping container of {} items in a reader/writer lock", self.len());
        ThreadSafe::new(self)
    }

    fn is_synchronized(&self) -> bool {
        false
    }
}

impl<C> MakeThreadSafe for ThreadSafe<C> {
    type Shared = ThreadSafe<C>;

    fn make_thread_safe(self) -> ThreadSafe<C> {
        log::trace!("container already synchronized; returning it unchanged");
        self
    }

    fn is_synchronized(&self) -> bool {
        true
    }
}

impl<T> MakeThreadSafe for BlockingQueue<T> {
    type Shared = Arc<BlockingQueue<T>>;

    fn make_thread_safe(self) -> Arc<BlockingQueue<T>> {
        log::debug!("blocking queue synchronises itself; sharing it without a lock");
        Arc::new(self)
    }

    fn is_synchronized(&self) -> bool {
        true
    }
}

impl<T> MakeThreadSafe for Arc<BlockingQueue<T>> {
    type Shared = Arc<BlockingQueue<T>>;

    fn make_thread_safe(self) -> Arc<BlockingQueue<T>> {
        self
    }

    fn is_synchronized(&self) -> bool {
        true
    }
}

/// Make a container shareable across threads; idempotent
pub fn make_thread_safe<M: MakeThreadSafe>(container: M) -> M::Shared {
    container.make_thread_safe()
}

//! Capacity-bounded blocking queue
//!
//! ```text
//!   producers                     BlockingQueue                    consumers
//!  ┌─────────┐  acquire permit  ┌──────────────────────────┐
//!  │ push(v) │ ───────────────► │ Semaphore (free permits) │
//!  └─────────┘   (may block)    ├──────────────────────────┤  pop()  ┌─────────┐
//!       │                       │ Mutex<DoubleLinkedList>  │ ──────► │  value  │
//!       └──── prepend ────────► │ front ............. back │         └─────────┘
//!                               └──────────────────────────┘   release permit
//! ```
//!
//! Every stored item holds exactly one permit, so free permits plus stored
//! items always equals the capacity. A producer blocks until a permit is
//! free; consumers never block.
//!
//! The storage mutex is only held for the list operation itself, never while
//! waiting for a permit. The queue is therefore shareable through `Arc` by any
//! number of producers and consumers as it is, and
//! [`make_thread_safe`](crate::sync::make_thread_safe) returns it in an `Arc`
//! rather than behind a [`ThreadSafe`](crate::sync::ThreadSafe) lock, where a
//! blocked producer would keep every consumer out.

use super::context::PushContext;
use crate::containers::api::{
    CancelSignal, Cancellable, Container, ContainerError, ContainerResult, List, Queue,
};
use crate::containers::write_joined;
use crate::core::sync::lock_or_recover;
use crate::list::DoubleLinkedList;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::{Semaphore, TryAcquireError};

/// FIFO queue that applies backpressure to producers once `capacity` items
/// are stored
///
/// ```
/// use containerkit::queue::BlockingQueueBuilder;
///
/// let queue = BlockingQueueBuilder::new(3).add_items([9, 8, 7, 6]).build();
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.pop(), Some(9));
/// assert_eq!(queue.try_push(1), Ok(()));
/// assert_eq!(queue.try_push(2), Err(2));
/// ```
#[derive(Debug)]
pub struct BlockingQueue<T> {
    capacity: usize,
    permits: Semaphore,
    storage: Mutex<DoubleLinkedList<T>>,
}

impl<T> BlockingQueue<T> {
    /// An empty queue holding at most `capacity` items
    ///
    /// A capacity of 0 makes every push wait forever. Capacities above
    /// [`Semaphore::MAX_PERMITS`] are clamped.
    pub fn new(capacity: usize) -> Self {
        let capacity = clamp_capacity(capacity);
        log::debug!("blocking queue created with capacity {}", capacity);
        Self {
            capacity,
            permits: Semaphore::new(capacity),
            storage: Mutex::new(DoubleLinkedList::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits not currently held by a stored item
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// Insert at the back, blocking the calling thread while the queue is full
    ///
    /// Works with or without an async runtime, but must not be called from a
    /// single-threaded runtime whose only thread is also the consumer.
    pub fn push(&self, value: T) {
        match futures::executor::block_on(self.permits.acquire()) {
            Ok(permit) => permit.forget(),
            Err(e) => {
                log::error!("blocking queue permit pool unavailable: {}", e);
                return;
            }
        }
        self.insert_with_permit(value);
    }

    /// Insert at the back, waiting asynchronously while the queue is full
    pub async fn push_async(&self, value: T) -> ContainerResult<()> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ContainerError::PermitPoolClosed)?;
        permit.forget();
        self.insert_with_permit(value);
        Ok(())
    }

    /// Insert at the back unless the context fires first
    ///
    /// On failure the value is dropped and the queue is unchanged. A context
    /// that has already fired fails even when a permit is free.
    pub async fn push_with_context(&self, ctx: &PushContext, value: T) -> ContainerResult<()> {
        if let Some(error) = ctx.err() {
            return Err(error);
        }

        let permit = tokio::select! {
            biased;
            error = ctx.done() => {
                log::debug!("push abandoned while waiting for a permit: {}", error);
                return Err(error);
            }
            acquired = self.permits.acquire() => {
                acquired.map_err(|_| ContainerError::PermitPoolClosed)?
            }
        };
        permit.forget();
        self.insert_with_permit(value);
        Ok(())
    }

    /// Insert without waiting; hands the value back when the queue is full
    pub fn try_push(&self, value: T) -> Result<(), T> {
        match self.permits.try_acquire() {
            Ok(permit) => {
                permit.forget();
                self.insert_with_permit(value);
                Ok(())
            }
            Err(TryAcquireError::NoPermits) | Err(TryAcquireError::Closed) => Err(value),
        }
    }

    /// Sequential blocking pushes; may block once per value
    pub fn push_all<I: IntoIterator<Item = T>>(&self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    /// Remove the front item and release its permit; never blocks
    pub fn pop(&self) -> Option<T> {
        let value = self.storage().pop_back()?;
        self.permits.add_permits(1);
        log::trace!("permit released");
        Some(value)
    }

    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.storage().get_back().cloned()
    }

    pub fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.storage().get_back().map(f)
    }

    pub fn len(&self) -> usize {
        self.storage().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every item, returning one permit per removed item
    pub fn clear(&self) {
        let mut storage = self.storage();
        let removed = storage.len();
        storage.clear();
        drop(storage);
        self.permits.add_permits(removed);
        log::debug!("blocking queue cleared, {} permits returned", removed);
    }

    /// Visit `(position, item)` front first, under the storage lock
    pub fn for_each<F>(&self, mut op: F)
    where
        F: FnMut(usize, &T),
    {
        for (position, value) in self.storage().iter().rev().enumerate() {
            op(position, value);
        }
    }

    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&usize, &T) -> bool,
    {
        self.storage()
            .iter()
            .rev()
            .enumerate()
            .any(|(position, value)| predicate(&position, value))
    }

    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&usize, &T) -> bool,
    {
        self.storage()
            .iter()
            .rev()
            .enumerate()
            .all(|(position, value)| predicate(&position, value))
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<(usize, T)>
    where
        F: FnMut(&usize, &T) -> bool,
        T: Clone,
    {
        self.storage()
            .iter()
            .rev()
            .enumerate()
            .find(|(position, value)| predicate(position, value))
            .map(|(position, value)| (position, value.clone()))
    }

    /// Copy of the stored items, front first
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.storage().iter().rev().cloned().collect()
    }

    /// Positions of the items stored at the time of the call, ending early
    /// once `signal` fires
    pub fn keys(&self, signal: CancelSignal) -> Cancellable<std::vec::IntoIter<usize>> {
        let positions: Vec<usize> = (0..self.len()).collect();
        Cancellable::new(positions.into_iter(), signal)
    }

    /// Snapshot of the items, front first, ending early once `signal` fires
    pub fn values(&self, signal: CancelSignal) -> Cancellable<std::vec::IntoIter<T>>
    where
        T: Clone,
    {
        Cancellable::new(self.snapshot().into_iter(), signal)
    }

    /// Snapshot of `(position, item)` pairs, ending early once `signal` fires
    pub fn items(&self, signal: CancelSignal) -> Cancellable<std::vec::IntoIter<(usize, T)>>
    where
        T: Clone,
    {
        let items: Vec<_> = self.snapshot().into_iter().enumerate().collect();
        Cancellable::new(items.into_iter(), signal)
    }

    fn storage(&self) -> MutexGuard<'_, DoubleLinkedList<T>> {
        lock_or_recover(&self.storage, "blocking queue storage")
    }

    fn insert_with_permit(&self, value: T) {
        log::trace!("permit acquired");
        self.storage().prepend(value);
    }
}

fn clamp_capacity(capacity: usize) -> usize {
    if capacity > Semaphore::MAX_PERMITS {
        log::warn!(
            "blocking queue capacity {} exceeds the permit limit; clamped to {}",
            capacity,
            Semaphore::MAX_PERMITS
        );
        Semaphore::MAX_PERMITS
    } else {
        capacity
    }
}

impl<T> Container for BlockingQueue<T> {
    fn len(&self) -> usize {
        BlockingQueue::len(self)
    }

    fn clear(&mut self) {
        BlockingQueue::clear(self);
    }
}

impl<T> Queue for BlockingQueue<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        BlockingQueue::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        BlockingQueue::pop(self)
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        BlockingQueue::peek_with(self, f)
    }
}

/// `BlockingQueue[capacity=N]` followed by the items, newest first
impl<T: fmt::Display> fmt::Display for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BlockingQueue[capacity={}]", self.capacity)?;
        write_joined(f, self.storage().iter())
    }
}

/// Builds a [`BlockingQueue`] with an initial batch
///
/// Items beyond the capacity are dropped, both while accumulating and at
/// build time; the builder never blocks.
#[derive(Debug)]
pub struct BlockingQueueBuilder<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T> BlockingQueueBuilder<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: clamp_capacity(capacity),
            items: Vec::new(),
        }
    }

    pub fn add_items<I: IntoIterator<Item = T>>(mut self, items: I) -> Self {
        let room = self.capacity - self.items.len();
        let before = self.items.len();
        let mut items = items.into_iter();
        self.items.extend(items.by_ref().take(room));
        if items.next().is_some() {
            log::warn!(
                "blocking queue builder truncated initial items to capacity {}",
                self.capacity
            );
        }
        log::trace!("builder accepted {} items", self.items.len() - before);
        self
    }

    pub fn build(mut self) -> BlockingQueue<T> {
        self.items.truncate(self.capacity);
        let stored = self.items.len();
        let storage: DoubleLinkedList<T> = self.items.into_iter().rev().collect();
        log::debug!(
            "blocking queue built with capacity {} and {} initial items",
            self.capacity,
            stored
        );
        BlockingQueue {
            capacity: self.capacity,
            permits: Semaphore::new(self.capacity - stored),
            storage: Mutex::new(storage),
        }
    }
}

//! Thread-safe container wrapper
//!
//! [`ThreadSafe`] puts any container behind a reader/writer lock. Read-only
//! operations share the lock; mutating operations take it exclusively, for
//! exactly the duration of the delegated call.
//!
//! ```text
//!   thread A ──len()/peek()/find()──► read lock ──┐
//!   thread B ──len()/peek()/find()──► read lock ──┼──► Arc<RwLock<C>> ──► C
//!   thread C ──push()/pop()/put()───► write lock ─┘
//! ```
//!
//! Wrapping is idempotent: [`make_thread_safe`] on a container that is
//! already a [`ThreadSafe`] hands it back unchanged instead of nesting a
//! second lock.
//!
//! Capabilities are surfaced through extension traits, one per container
//! capability, implemented for `ThreadSafe<C>` whenever `C` has that
//! capability. Bring them into scope with `use containerkit::sync::*`.
//!
//! # Limitations
//!
//! - `iterator()` and `iterator_reverse()` hold the lock only while the
//!   iterator is produced. They return a snapshot, so a traversal does not
//!   observe mutations made after the call.
//! - Closures passed to `read`, `write`, `for_each`, `any`, `all` and `find`
//!   run under the lock and must not call back into the same wrapper.
//! - Only [`Unsynchronized`](crate::containers::api::Unsynchronized)
//!   containers can be locked. [`make_thread_safe`] hands a
//!   [`BlockingQueue`](crate::queue::BlockingQueue) back in an `Arc`, since a
//!   producer blocked while holding the write lock would keep every consumer
//!   out. Locking one directly does not compile:
//!
//! ```compile_fail
//! use containerkit::queue::BlockingQueue;
//! use containerkit::sync::ThreadSafe;
//!
//! let locked = ThreadSafe::new(BlockingQueue::<i32>::new(1));
//! ```
//!
//! # Example
//!
//! ```
//! use containerkit::containers::api::*;
//! use containerkit::stack::ArrayStack;
//! use containerkit::sync::*;
//! use std::thread;
//!
//! let stack = make_thread_safe(ArrayStack::new());
//! let workers: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let stack = stack.clone();
//!         thread::spawn(move || stack.push(worker))
//!     })
//!     .collect();
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//!
//! assert_eq!(stack.len(), 4);
//! assert!(make_thread_safe(stack.clone()).ptr_eq(&stack));
//! ```

mod capabilities;
mod wrapper;

pub use capabilities::{
    ConcurrentList, ConcurrentMap, ConcurrentQueue, ConcurrentSet, ConcurrentStack,
};
pub use wrapper::{make_thread_safe, MakeThreadSafe, ThreadSafe};

#[cfg(test)]
mod tests;

//! Queue Containers
//!
//! Three queues sharing the [`Queue`](crate::containers::api::Queue)
//! capability:
//!
//! - [`LinkedQueue`]: unbounded FIFO over a doubly linked list
//! - [`HeapPq`]: binary-heap priority queue ordered by a comparator
//! - [`BlockingQueue`]: bounded FIFO that blocks producers while full
//!
//! # Ordering guarantees
//!
//! The heap guarantees heap order only: the highest-priority element is at
//! the root. Popping repeatedly yields non-increasing priority, but
//! interleaved pushes and pops from several threads see no global order
//! unless they synchronize externally (see [`crate::sync`]).
//!
//! The blocking queue is FIFO for items whose insertion has completed.
//! Producers blocked on a full queue are not served in arrival order:
//! whichever acquires the freed permit first inserts first.
//!
//! # Example
//!
//! ```rust,no_run
//! use containerkit::queue::api::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), ContainerError> {
//! let queue = Arc::new(BlockingQueue::new(2));
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     std::thread::spawn(move || {
//!         for value in 0..10 {
//!             queue.push(value); // blocks while two items are waiting
//!         }
//!     })
//! };
//!
//! let ctx = PushContext::with_timeout(Duration::from_millis(50));
//! match queue.push_with_context(&ctx, 99).await {
//!     Ok(()) => println!("pushed"),
//!     Err(e) if e.is_context_failure() => println!("gave up: {}", e),
//!     Err(e) => return Err(e),
//! }
//!
//! while let Some(value) = queue.pop() {
//!     println!("{}", value);
//! }
//! # let _ = producer.join();
//! # Ok(())
//! # }
//! ```

pub mod api;
mod blocking;
mod context;
mod heap;
mod linked;

pub use blocking::{BlockingQueue, BlockingQueueBuilder};
pub use context::PushContext;
pub use heap::{HeapPq, HeapPqBuilder, OrderedIter};
pub use linked::LinkedQueue;

#[cfg(test)]
mod tests;

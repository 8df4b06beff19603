//! Public API for the queue containers

pub use crate::queue::blocking::{BlockingQueue, BlockingQueueBuilder};
pub use crate::queue::context::PushContext;
pub use crate::queue::heap::{HeapPq, HeapPqBuilder};
pub use crate::queue::linked::LinkedQueue;

pub use crate::compare::{Comparator, Natural, Opposite, OppositeNatural, Priority};
pub use crate::containers::api::{Container, ContainerError, ContainerResult, Queue};

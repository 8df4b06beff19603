//! Container Capability Contracts
//!
//! Shared traits, error type and lazy enumeration used by every container in
//! the crate.
//!
//! # Capabilities
//!
//! ```text
//!                         ┌─────────────┐
//!                         │  Container  │  len / is_empty / clear
//!                         └──────┬──────┘
//!        ┌───────────┬───────────┼───────────┬───────────┐
//!        ▼           ▼           ▼           ▼           ▼
//!    ┌───────┐   ┌───────┐   ┌───────┐   ┌───────┐   ┌───────┐
//!    │ Stack │   │ Queue │   │ List  │   │  Map  │   │  Set  │
//!    └───────┘   └───────┘   └───┬───┘   └───┬───┘   └───┬───┘
//!                                └───────────┼───────────┘
//!                                            ▼
//!                                     ┌────────────┐
//!                                     │ Enumerable │  entries / for_each / any /
//!                                     └────────────┘  all / find / keys / values / items
//! ```
//!
//! Stacks and queues are enumerable too when their storage can lend
//! references (every container except the blocking queue, whose storage sits
//! behind its own mutex).
//!
//! # Absence of value
//!
//! Accessors that can miss (`pop`, `peek`, `get`) return `Option`. Nothing in
//! this crate panics on an empty container.
//!
//! # Example
//!
//! ```
//! use containerkit::containers::api::*;
//! use containerkit::list::ArrayList;
//!
//! let mut list: ArrayList<i32> = [3, 1, 4].into_iter().collect();
//! list.append(1);
//!
//! assert_eq!(list.len(), 4);
//! assert!(list.any(|_, value| *value == 4));
//! assert_eq!(list.find(|_, value| *value == 1), Some((1, 1)));
//! ```

pub mod api;
mod enumeration;
mod error;
mod traits;

pub use enumeration::Cancellable;
pub use error::{ContainerError, ContainerResult};
pub use traits::{
    Container, Entries, Enumerable, ForwardIterable, Items, Keys, List, Map, Queue,
    ReverseIterable, Set, Stack, Unsynchronized, Values,
};

pub(crate) use traits::write_joined;

//! Sequence containers
//!
//! Thin adapters over std storage implementing the [`List`] capability:
//!
//! - [`ArrayList`]: contiguous `Vec` storage, O(1) indexed access
//! - [`SingleLinkedList`]: owned singly linked nodes, O(1) prepend
//! - [`DoubleLinkedList`]: `std::collections::LinkedList`, O(1) at both ends
//!
//! [`List`]: crate::containers::api::List

mod arraylist;
mod double;
mod single;

pub use arraylist::ArrayList;
pub use double::DoubleLinkedList;
pub use single::SingleLinkedList;

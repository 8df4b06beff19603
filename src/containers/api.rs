//! Public API for container capabilities
//!
//! Import `containerkit::containers::api::*` to bring every capability trait
//! into scope.

pub use crate::containers::enumeration::Cancellable;
pub use crate::containers::error::{ContainerError, ContainerResult};
pub use crate::containers::traits::{
    Container, Entries, Enumerable, ForwardIterable, Items, Keys, List, Map, Queue,
    ReverseIterable, Set, Stack, Unsynchronized, Values,
};

pub use crate::core::cancel::{CancelSignal, Canceller};

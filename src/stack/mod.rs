//! Last-in, first-out containers
//!
//! Both stacks enumerate in pop order (top first) and display bottom to top,
//! in the order the values were pushed.

mod array;
mod linked;

pub use array::ArrayStack;
pub use linked::LinkedStack;

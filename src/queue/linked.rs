use crate::containers::api::{Container, Entries, Enumerable, List, Queue, Unsynchronized};
use crate::list::DoubleLinkedList;
use std::fmt;

/// Unbounded FIFO queue over a [`DoubleLinkedList`]
///
/// Values enter at the front of the list and leave from the back, so the
/// `Display` form lists the newest value first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    nodes: DoubleLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: DoubleLinkedList::new(),
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.push_all(iter);
        queue
    }
}

impl<T> Unsynchronized for LinkedQueue<T> {}

impl<T> Container for LinkedQueue<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<T> Queue for LinkedQueue<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.nodes.prepend(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.nodes.pop_back()
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.nodes.get_back().map(f)
    }
}

/// Enumerates `(position, element)` from the front of the queue (oldest first)
impl<T> Enumerable for LinkedQueue<T> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        Box::new(self.nodes.iter().rev().enumerate())
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LinkedQueue")?;
        crate::containers::write_joined(f, self.nodes.iter())
    }
}

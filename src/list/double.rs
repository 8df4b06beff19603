use crate::containers::api::{
    Container, Entries, Enumerable, ForwardIterable, List, ReverseIterable, Unsynchronized,
};
use std::collections::LinkedList;
use std::fmt;

/// Doubly linked list
///
/// Backing store for [`LinkedQueue`] and [`BlockingQueue`]: both push at the
/// front and pop from the back, which are O(1) here.
///
/// [`LinkedQueue`]: crate::queue::LinkedQueue
/// [`BlockingQueue`]: crate::queue::BlockingQueue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleLinkedList<T> {
    nodes: LinkedList<T>,
}

impl<T> DoubleLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }

    pub fn iter(&self) -> std::collections::linked_list::Iter<'_, T> {
        self.nodes.iter()
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoubleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<T> Unsynchronized for DoubleLinkedList<T> {}

impl<T> Container for DoubleLinkedList<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<T> Enumerable for DoubleLinkedList<T> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        Box::new(self.nodes.iter().enumerate())
    }
}

impl<T> ForwardIterable for DoubleLinkedList<T> {
    fn iter_forward(&self) -> Entries<'_, usize, T> {
        self.entries()
    }
}

impl<T> ReverseIterable for DoubleLinkedList<T> {
    fn iter_reverse(&self) -> Entries<'_, usize, T> {
        let last = self.nodes.len();
        Box::new(
            self.nodes
                .iter()
                .rev()
                .enumerate()
                .map(move |(offset, value)| (last - 1 - offset, value)),
        )
    }
}

impl<T> List for DoubleLinkedList<T> {
    fn append(&mut self, value: T) {
        self.nodes.push_back(value);
    }

    fn prepend(&mut self, value: T) {
        self.nodes.push_front(value);
    }

    fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.nodes.len() {
            return false;
        }
        let mut tail = self.nodes.split_off(index);
        self.nodes.push_back(value);
        self.nodes.append(&mut tail);
        true
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.nodes.len() {
            return false;
        }
        let mut tail = self.nodes.split_off(index);
        self.nodes.extend(values);
        self.nodes.append(&mut tail);
        true
    }

    fn pop_back(&mut self) -> Option<T> {
        self.nodes.pop_back()
    }

    fn pop_front(&mut self) -> Option<T> {
        self.nodes.pop_front()
    }

    fn get_front(&self) -> Option<&T> {
        self.nodes.front()
    }

    fn get_back(&self) -> Option<&T> {
        self.nodes.back()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.nodes.iter().nth(index)
    }
}

impl<T: fmt::Display> fmt::Display for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DoubleLinkedList")?;
        crate::containers::write_joined(f, &self.nodes)
    }
}

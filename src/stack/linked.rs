use crate::containers::api::{Container, Entries, Enumerable, List, Stack, Unsynchronized};
use crate::list::SingleLinkedList;
use std::fmt;

/// Stack of singly linked nodes; the top is the head of the list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedStack<T> {
    nodes: SingleLinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self {
            nodes: SingleLinkedList::new(),
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.push_all(iter);
        stack
    }
}

impl<T> Unsynchronized for LinkedStack<T> {}

impl<T> Container for LinkedStack<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<T> Stack for LinkedStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.nodes.prepend(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.nodes.pop_front()
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.nodes.get_front().map(f)
    }
}

impl<T> Enumerable for LinkedStack<T> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        self.nodes.entries()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LinkedStack")?;
        let mut bottom_up: Vec<&T> = self.nodes.iter().collect();
        bottom_up.reverse();
        crate::containers::write_joined(f, bottom_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bottom_to_top() {
        assert_eq!(LinkedStack::<i32>::new().to_string(), "LinkedStack\n");

        let stack: LinkedStack<i32> = [100, 1145, -202, 5, 6, 7].into_iter().collect();
        assert_eq!(stack.to_string(), "LinkedStack\n100,1145,-202,5,6,7");
    }

    #[test]
    fn test_lifo_order_and_len() {
        let mut stack = LinkedStack::new();
        stack.push("first");
        stack.push("second");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some("second"));
        assert_eq!(stack.pop(), Some("second"));
        assert_eq!(stack.pop(), Some("first"));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_enumerates_top_first() {
        let stack: LinkedStack<u8> = [1, 2, 3].into_iter().collect();
        let order: Vec<_> = stack.entries().map(|(_, value)| *value).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }
}

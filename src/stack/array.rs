use crate::containers::api::{Container, Entries, Enumerable, Stack, Unsynchronized};
use crate::containers::write_joined;
use std::fmt;

/// Stack backed by a `Vec`; the top is the end of the vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Unsynchronized for ArrayStack<T> {}

impl<T> Container for ArrayStack<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Stack for ArrayStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.items.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.items.last().map(f)
    }
}

impl<T> Enumerable for ArrayStack<T> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        Box::new(self.items.iter().rev().enumerate())
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ArrayStack")?;
        write_joined(f, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bottom_to_top() {
        let mut stack = ArrayStack::new();
        assert_eq!(stack.to_string(), "ArrayStack\n");

        stack.push_all([100, 1145, -202, 5, 6, 7]);
        assert_eq!(stack.to_string(), "ArrayStack\n100,1145,-202,5,6,7");
    }

    #[test]
    fn test_lifo_order() {
        let mut stack: ArrayStack<i32> = [1, 2, 3].into_iter().collect();

        assert_eq!(stack.peek(), Some(3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_enumerates_top_first() {
        let stack: ArrayStack<char> = ['a', 'b', 'c'].into_iter().collect();
        let order: Vec<_> = stack.entries().map(|(_, value)| *value).collect();
        assert_eq!(order, vec!['c', 'b', 'a']);
        assert_eq!(stack.peek_with(|top| top.to_ascii_uppercase()), Some('C'));
    }
}

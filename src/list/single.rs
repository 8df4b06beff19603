use crate::containers::api::{Container, Entries, Enumerable, ForwardIterable, List, Unsynchronized};
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list
///
/// Front operations are O(1); back operations walk the list.
#[derive(Debug)]
pub struct SingleLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SingleLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Slot holding the node at `index`, or the empty tail slot when `index == len`
    fn slot_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        if index > self.len {
            return None;
        }
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return None,
            }
        }
        Some(cursor)
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Drop for SingleLinkedList<T> {
    // Unlink iteratively; the default recursive drop can overflow the stack
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append_all(iter);
        list
    }
}

impl<T> Unsynchronized for SingleLinkedList<T> {}

impl<T> Container for SingleLinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Enumerable for SingleLinkedList<T> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        Box::new(self.iter().enumerate())
    }
}

impl<T> ForwardIterable for SingleLinkedList<T> {
    fn iter_forward(&self) -> Entries<'_, usize, T> {
        self.entries()
    }
}

impl<T> List for SingleLinkedList<T> {
    fn append(&mut self, value: T) {
        let len = self.len;
        self.insert(len, value);
    }

    /// Appends a batch in a single walk to the tail
    fn append_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in values {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }

    fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    fn insert(&mut self, index: usize, value: T) -> bool {
        match self.slot_mut(index) {
            Some(slot) => {
                let next = slot.take();
                *slot = Some(Box::new(Node { value, next }));
                self.len += 1;
                true
            }
            None => false,
        }
    }

    fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let node = self.slot_mut(last)?.take()?;
        self.len -= 1;
        Some(node.value)
    }

    fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    fn get_front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    fn get_back(&self) -> Option<&T> {
        self.iter().last()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }
}

impl<T: fmt::Display> fmt::Display for SingleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SingleLinkedList")?;
        crate::containers::write_joined(f, self.iter())
    }
}

/// Front-to-back iterator over a [`SingleLinkedList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> SingleLinkedList<i32> {
        values.iter().copied().collect()
    }

    fn contents(list: &SingleLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_display() {
        assert_eq!(SingleLinkedList::<i32>::new().to_string(), "SingleLinkedList\n");
        assert_eq!(list_of(&[987654321]).to_string(), "SingleLinkedList\n987654321");
        assert_eq!(
            list_of(&[100, 1145, -202, 5, 6, 7]).to_string(),
            "SingleLinkedList\n100,1145,-202,5,6,7"
        );
    }

    #[test]
    fn test_append_prepend_and_insert() {
        let mut list = list_of(&[2, 4]);

        list.prepend(1);
        list.append(6);
        assert!(list.insert(2, 3));
        assert!(list.insert(4, 5));
        assert!(!list.insert(7, 99));
        assert_eq!(contents(&list), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list.len(), 6);

        list.prepend_all(vec![-1, 0]);
        assert_eq!(contents(&list), vec![-1, 0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_pops_keep_length_in_step() {
        let mut list = list_of(&[1, 2, 3]);

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_front(), list.get_back());

        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        list.append(9);
        assert_eq!(contents(&list), vec![9]);
    }

    #[test]
    fn test_get_and_clear() {
        let mut list = list_of(&[10, 20, 30]);
        assert_eq!(list.get(1), Some(&20));
        assert_eq!(list.get(3), None);

        let copy = list.clone();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get_front(), None);
        assert_eq!(copy.len(), 3, "Clone must be independent");
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let list: SingleLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}

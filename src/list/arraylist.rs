use crate::containers::api::{
    Container, Entries, Enumerable, ForwardIterable, List, ReverseIterable, Unsynchronized,
};
use crate::containers::write_joined;
use std::fmt;

/// Growable array list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> Unsynchronized for ArrayList<T> {}

impl<T> Container for ArrayList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Enumerable for ArrayList<T> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        Box::new(self.items.iter().enumerate())
    }
}

impl<T> ForwardIterable for ArrayList<T> {
    fn iter_forward(&self) -> Entries<'_, usize, T> {
        self.entries()
    }
}

impl<T> ReverseIterable for ArrayList<T> {
    fn iter_reverse(&self) -> Entries<'_, usize, T> {
        Box::new(self.items.iter().enumerate().rev())
    }
}

impl<T> List for ArrayList<T> {
    fn append(&mut self, value: T) {
        self.items.push(value);
    }

    fn prepend(&mut self, value: T) {
        self.items.insert(0, value);
    }

    fn prepend_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_all(0, values);
    }

    fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, value);
        true
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.items.len() {
            return false;
        }
        let tail = self.items.split_off(index);
        self.items.extend(values);
        self.items.extend(tail);
        true
    }

    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    fn get_front(&self) -> Option<&T> {
        self.items.first()
    }

    fn get_back(&self) -> Option<&T> {
        self.items.last()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ArrayList")?;
        write_joined(f, &self.items)
    }
}

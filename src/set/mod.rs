//! Set container
//!
//! [`HashSet`] adapts `std::collections::HashSet` to the
//! [`Set`](crate::containers::api::Set) capability.

use crate::containers::api::{Container, Entries, Enumerable, Set, Unsynchronized};
use crate::containers::write_joined;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

/// Hash set enumerating `(element, &element)`
///
/// ```
/// use containerkit::containers::api::*;
/// use containerkit::set::HashSet;
///
/// let mut tags: HashSet<&str> = ["rust", "queue"].into_iter().collect();
/// assert!(!tags.add("rust"));
/// assert!(tags.contains_all([&"rust", &"queue"]));
/// assert_eq!(tags.remove_all([&"queue", &"heap"]), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HashSet<T> {
    values: hash_set::HashSet<T>,
}

impl<T: Eq + Hash + Clone> HashSet<T> {
    pub fn new() -> Self {
        Self {
            values: hash_set::HashSet::new(),
        }
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Eq + Hash + Clone> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Unsynchronized for HashSet<T> {}

impl<T: Eq + Hash + Clone> Container for HashSet<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Eq + Hash + Clone> Enumerable for HashSet<T> {
    type Key = T;
    type Value = T;

    fn entries(&self) -> Entries<'_, T, T> {
        Box::new(self.values.iter().map(|value| (value.clone(), value)))
    }
}

impl<T: Eq + Hash + Clone> Set for HashSet<T> {
    fn add(&mut self, value: T) -> bool {
        self.values.insert(value)
    }

    fn remove(&mut self, value: &T) -> bool {
        self.values.remove(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }
}

impl<T: fmt::Display> fmt::Display for HashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashSet")?;
        write_joined(f, &self.values)
    }
}

//! Associative container
//!
//! [`HashMap`] adapts `std::collections::HashMap` to the
//! [`Map`](crate::containers::api::Map) capability. Enumeration order is
//! unspecified and may differ between two traversals of an unchanged map.

use crate::containers::api::{Container, Entries, Enumerable, Map, Unsynchronized};
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

/// Hash map enumerating `(key, &value)`
///
/// Keys are `Clone` so that enumeration can yield owned keys.
///
/// ```
/// use containerkit::containers::api::*;
/// use containerkit::map::HashMap;
///
/// let mut ports = HashMap::new();
/// ports.put_all([("http", 80), ("https", 443)]);
///
/// assert_eq!(ports.get(&"https"), Some(&443));
/// assert_eq!(ports.remove_all_keys([&"http", &"gopher"]), 1);
/// assert!(!ports.contains_any_key([&"http", &"ftp"]));
/// ```
#[derive(Debug, Clone)]
pub struct HashMap<K, V> {
    values: hash_map::HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V> HashMap<K, V> {
    pub fn new() -> Self {
        Self {
            values: hash_map::HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: hash_map::HashMap::with_capacity(capacity),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Unsynchronized for HashMap<K, V> {}

impl<K: Eq + Hash + Clone, V> Container for HashMap<K, V> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Eq + Hash + Clone, V> Enumerable for HashMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.values.iter().map(|(key, value)| (key.clone(), value)))
    }
}

impl<K: Eq + Hash + Clone, V> Map for HashMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.values.insert(key, value);
    }

    fn remove_key(&mut self, key: &K) -> bool {
        self.values.remove(key).is_some()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }
}

/// `HashMap` followed by `key:value` pairs in unspecified order
impl<K: fmt::Display, V: fmt::Display> fmt::Display for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashMap")?;
        for (position, (key, value)) in self.values.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        Ok(())
    }
}

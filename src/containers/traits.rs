//! Capability traits shared by every container
//!
//! Each concrete container implements only the traits it supports. Generic
//! code (and the thread-safe wrapper) is written against these traits, never
//! against a concrete container.

use super::enumeration::Cancellable;
use crate::core::cancel::CancelSignal;

/// Borrowing `(key, &value)` iterator produced by an [`Enumerable`]
pub type Entries<'a, K, V> = Box<dyn Iterator<Item = (K, &'a V)> + 'a>;

/// Lazy key sequence returned by [`Enumerable::keys`]
pub type Keys<'a, K> = Cancellable<Box<dyn Iterator<Item = K> + 'a>>;

/// Lazy value sequence returned by [`Enumerable::values`]
pub type Values<'a, V> = Cancellable<Box<dyn Iterator<Item = &'a V> + 'a>>;

/// Lazy item sequence returned by [`Enumerable::items`]
pub type Items<'a, K, V> = Cancellable<Entries<'a, K, V>>;

/// Behaviour common to all containers
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// A container with no locking of its own
///
/// Only these may be placed behind a [`ThreadSafe`](crate::sync::ThreadSafe)
/// lock. [`BlockingQueue`](crate::queue::BlockingQueue) synchronises itself
/// and can block inside `push`, so it does not implement this trait.
pub trait Unsynchronized {}

/// Finite traversal over `(key, value)` pairs
///
/// Lists, queues and stacks enumerate `(index, element)`; maps enumerate
/// `(key, value)`; sets enumerate `(element, element)`. Only [`entries`]
/// is required, everything else is provided on top of it.
///
/// [`entries`]: Enumerable::entries
pub trait Enumerable {
    type Key;
    type Value;

    fn entries(&self) -> Entries<'_, Self::Key, Self::Value>;

    fn for_each<F>(&self, mut op: F)
    where
        F: FnMut(Self::Key, &Self::Value),
    {
        for (key, value) in self.entries() {
            op(key, value);
        }
    }

    fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.entries().any(|(key, value)| predicate(&key, value))
    }

    fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.entries().all(|(key, value)| predicate(&key, value))
    }

    /// First pair matching the predicate, copied out of the container
    fn find<F>(&self, mut predicate: F) -> Option<(Self::Key, Self::Value)>
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool,
        Self::Value: Clone,
    {
        self.entries()
            .find(|(key, value)| predicate(key, *value))
            .map(|(key, value)| (key, value.clone()))
    }

    fn keys(&self, signal: CancelSignal) -> Keys<'_, Self::Key> {
        Cancellable::new(Box::new(self.entries().map(|(key, _)| key)), signal)
    }

    fn values(&self, signal: CancelSignal) -> Values<'_, Self::Value> {
        Cancellable::new(Box::new(self.entries().map(|(_, value)| value)), signal)
    }

    fn items(&self, signal: CancelSignal) -> Items<'_, Self::Key, Self::Value> {
        Cancellable::new(self.entries(), signal)
    }
}

/// Front-to-back traversal yielding `(index, element)`
pub trait ForwardIterable: Enumerable<Key = usize> {
    fn iter_forward(&self) -> Entries<'_, usize, Self::Value>;
}

/// Back-to-front traversal yielding `(index, element)`
pub trait ReverseIterable: Enumerable<Key = usize> {
    fn iter_reverse(&self) -> Entries<'_, usize, Self::Value>;
}

/// Last-in, first-out access
pub trait Stack: Container {
    type Item;

    fn push(&mut self, value: Self::Item);

    fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
        Self: Sized,
    {
        for value in values {
            self.push(value);
        }
    }

    fn pop(&mut self) -> Option<Self::Item>;

    /// Inspect the top element in place
    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Self::Item) -> R;

    fn peek(&self) -> Option<Self::Item>
    where
        Self::Item: Clone,
    {
        self.peek_with(Clone::clone)
    }
}

/// First-in, first-out access (or highest priority first, for priority queues)
pub trait Queue: Container {
    type Item;

    fn push(&mut self, value: Self::Item);

    fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
        Self: Sized,
    {
        for value in values {
            self.push(value);
        }
    }

    fn pop(&mut self) -> Option<Self::Item>;

    /// Inspect the front element in place
    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Self::Item) -> R;

    fn peek(&self) -> Option<Self::Item>
    where
        Self::Item: Clone,
    {
        self.peek_with(Clone::clone)
    }
}

/// Indexed sequence
///
/// An insert index is valid when `index <= len()`; inserting at `len()`
/// appends. Out-of-range inserts return `false` and leave the list unchanged.
pub trait List: Container + Enumerable<Key = usize> {
    fn append(&mut self, value: Self::Value);

    fn append_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Value>,
        Self: Sized,
    {
        for value in values {
            self.append(value);
        }
    }

    fn prepend(&mut self, value: Self::Value);

    /// Prepend a batch, keeping the batch in its original order
    fn prepend_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Value>,
        Self: Sized,
    {
        let values: Vec<_> = values.into_iter().collect();
        for value in values.into_iter().rev() {
            self.prepend(value);
        }
    }

    fn insert(&mut self, index: usize, value: Self::Value) -> bool;

    fn insert_all<I>(&mut self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = Self::Value>,
        Self: Sized,
    {
        if index > self.len() {
            return false;
        }
        for (offset, value) in values.into_iter().enumerate() {
            self.insert(index + offset, value);
        }
        true
    }

    fn pop_back(&mut self) -> Option<Self::Value>;

    fn pop_front(&mut self) -> Option<Self::Value>;

    fn get_front(&self) -> Option<&Self::Value>;

    fn get_back(&self) -> Option<&Self::Value>;

    fn get(&self, index: usize) -> Option<&Self::Value>;
}

/// Key to value association
pub trait Map: Container + Enumerable {
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Insert or replace
    fn put(&mut self, key: Self::Key, value: Self::Value);

    fn put_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
        Self: Sized,
    {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// Returns `true` if the key was present
    fn remove_key(&mut self, key: &Self::Key) -> bool;

    /// Returns the number of keys that were present
    fn remove_all_keys<'k, I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k,
        Self: Sized,
    {
        let mut removed = 0;
        for key in keys {
            if self.remove_key(key) {
                removed += 1;
            }
        }
        removed
    }

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn contains_all_keys<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k,
        Self: Sized,
    {
        keys.into_iter().all(|key| self.contains_key(key))
    }

    fn contains_any_key<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k,
        Self: Sized,
    {
        keys.into_iter().any(|key| self.contains_key(key))
    }
}

/// Unordered collection of distinct elements, enumerated as `(element, element)`
pub trait Set: Container + Enumerable {
    /// Returns `true` if the element was not already present
    fn add(&mut self, value: Self::Value) -> bool;

    fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Value>,
        Self: Sized,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Returns `true` if the element was present
    fn remove(&mut self, value: &Self::Value) -> bool;

    /// Returns the number of elements that were present
    fn remove_all<'v, I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v,
        Self: Sized,
    {
        let mut removed = 0;
        for value in values {
            if self.remove(value) {
                removed += 1;
            }
        }
        removed
    }

    fn contains(&self, value: &Self::Value) -> bool;

    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v,
        Self: Sized,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    fn contains_any<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v,
        Self: Sized,
    {
        values.into_iter().any(|value| self.contains(value))
    }
}

/// Comma-joined `Display` of a sequence, used by the container `Display` impls
pub(crate) fn write_joined<'a, T, I>(f: &mut std::fmt::Formatter<'_>, items: I) -> std::fmt::Result
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

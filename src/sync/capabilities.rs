//! Per-capability methods for [`ThreadSafe`]
//!
//! Each trait mirrors one container capability with `&self` receivers, so a
//! shared handle can be used from many threads at once. Mutations take the
//! write lock, inspections take the read lock. Methods that return elements
//! hand back clones, since a reference could not outlive the lock.

use super::wrapper::ThreadSafe;
use crate::containers::api::{List, Map, Queue, Set, Stack};

pub trait ConcurrentStack {
    type Item;

    fn push(&self, value: Self::Item);

    fn push_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = Self::Item>;

    fn pop(&self) -> Option<Self::Item>;

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Self::Item) -> R;

    fn peek(&self) -> Option<Self::Item>
    where
        Self::Item: Clone;
}

impl<C: Stack> ConcurrentStack for ThreadSafe<C> {
    type Item = C::Item;

    fn push(&self, value: C::Item) {
        self.write(|stack| stack.push(value));
    }

    /// The whole batch is pushed under one write lock
    fn push_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = C::Item>,
    {
        self.write(|stack| stack.push_all(values));
    }

    fn pop(&self) -> Option<C::Item> {
        self.write(|stack| stack.pop())
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&C::Item) -> R,
    {
        self.read(|stack| stack.peek_with(f))
    }

    fn peek(&self) -> Option<C::Item>
    where
        C::Item: Clone,
    {
        self.read(|stack| stack.peek())
    }
}

pub trait ConcurrentQueue {
    type Item;

    fn push(&self, value: Self::Item);

    fn push_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = Self::Item>;

    fn pop(&self) -> Option<Self::Item>;

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Self::Item) -> R;

    fn peek(&self) -> Option<Self::Item>
    where
        Self::Item: Clone;
}

impl<C: Queue> ConcurrentQueue for ThreadSafe<C> {
    type Item = C::Item;

    fn push(&self, value: C::Item) {
        self.write(|queue| queue.push(value));
    }

    fn push_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = C::Item>,
    {
        self.write(|queue| queue.push_all(values));
    }

    fn pop(&self) -> Option<C::Item> {
        self.write(|queue| queue.pop())
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&C::Item) -> R,
    {
        self.read(|queue| queue.peek_with(f))
    }

    fn peek(&self) -> Option<C::Item>
    where
        C::Item: Clone,
    {
        self.read(|queue| queue.peek())
    }
}

pub trait ConcurrentList {
    type Value;

    fn append(&self, value: Self::Value);

    fn append_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = Self::Value>;

    fn prepend(&self, value: Self::Value);

    fn prepend_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = Self::Value>;

    fn insert(&self, index: usize, value: Self::Value) -> bool;

    fn insert_all<I>(&self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = Self::Value>;

    fn pop_back(&self) -> Option<Self::Value>;

    fn pop_front(&self) -> Option<Self::Value>;

    fn get_front(&self) -> Option<Self::Value>
    where
        Self::Value: Clone;

    fn get_back(&self) -> Option<Self::Value>
    where
        Self::Value: Clone;

    fn get(&self, index: usize) -> Option<Self::Value>
    where
        Self::Value: Clone;
}

impl<C: List> ConcurrentList for ThreadSafe<C> {
    type Value = C::Value;

    fn append(&self, value: C::Value) {
        self.write(|list| list.append(value));
    }

    fn append_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = C::Value>,
    {
        self.write(|list| list.append_all(values));
    }

    fn prepend(&self, value: C::Value) {
        self.write(|list| list.prepend(value));
    }

    fn prepend_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = C::Value>,
    {
        self.write(|list| list.prepend_all(values));
    }

    fn insert(&self, index: usize, value: C::Value) -> bool {
        self.write(|list| list.insert(index, value))
    }

    fn insert_all<I>(&self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = C::Value>,
    {
        self.write(|list| list.insert_all(index, values))
    }

    fn pop_back(&self) -> Option<C::Value> {
        self.write(|list| list.pop_back())
    }

    fn pop_front(&self) -> Option<C::Value> {
        self.write(|list| list.pop_front())
    }

    fn get_front(&self) -> Option<C::Value>
    where
        C::Value: Clone,
    {
        self.read(|list| list.get_front().cloned())
    }

    fn get_back(&self) -> Option<C::Value>
    where
        C::Value: Clone,
    {
        self.read(|list| list.get_back().cloned())
    }

    fn get(&self, index: usize) -> Option<C::Value>
    where
        C::Value: Clone,
    {
        self.read(|list| list.get(index).cloned())
    }
}

pub trait ConcurrentMap {
    type Key;
    type Value;

    fn get(&self, key: &Self::Key) -> Option<Self::Value>
    where
        Self::Value: Clone;

    fn put(&self, key: Self::Key, value: Self::Value);

    fn put_all<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>;

    fn remove_key(&self, key: &Self::Key) -> bool;

    fn remove_all_keys<'k, I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k;

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn contains_all_keys<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k;

    fn contains_any_key<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k;
}

impl<C: Map> ConcurrentMap for ThreadSafe<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn get(&self, key: &C::Key) -> Option<C::Value>
    where
        C::Value: Clone,
    {
        self.read(|map| map.get(key).cloned())
    }

    fn put(&self, key: C::Key, value: C::Value) {
        self.write(|map| map.put(key, value));
    }

    fn put_all<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (C::Key, C::Value)>,
    {
        self.write(|map| map.put_all(entries));
    }

    fn remove_key(&self, key: &C::Key) -> bool {
        self.write(|map| map.remove_key(key))
    }

    fn remove_all_keys<'k, I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'k C::Key>,
        C::Key: 'k,
    {
        self.write(|map| map.remove_all_keys(keys))
    }

    fn contains_key(&self, key: &C::Key) -> bool {
        self.read(|map| map.contains_key(key))
    }

    fn contains_all_keys<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k C::Key>,
        C::Key: 'k,
    {
        self.read(|map| map.contains_all_keys(keys))
    }

    fn contains_any_key<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k C::Key>,
        C::Key: 'k,
    {
        self.read(|map| map.contains_any_key(keys))
    }
}

pub trait ConcurrentSet {
    type Value;

    fn add(&self, value: Self::Value) -> bool;

    fn add_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = Self::Value>;

    fn remove(&self, value: &Self::Value) -> bool;

    fn remove_all<'v, I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v;

    fn contains(&self, value: &Self::Value) -> bool;

    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v;

    fn contains_any<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v;
}

impl<C: Set> ConcurrentSet for ThreadSafe<C> {
    type Value = C::Value;

    fn add(&self, value: C::Value) -> bool {
        self.write(|set| set.add(value))
    }

    fn add_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = C::Value>,
    {
        self.write(|set| set.add_all(values));
    }

    fn remove(&self, value: &C::Value) -> bool {
        self.write(|set| set.remove(value))
    }

    fn remove_all<'v, I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = &'v C::Value>,
        C::Value: 'v,
    {
        self.write(|set| set.remove_all(values))
    }

    fn contains(&self, value: &C::Value) -> bool {
        self.read(|set| set.contains(value))
    }

    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v C::Value>,
        C::Value: 'v,
    {
        self.read(|set| set.contains_all(values))
    }

    fn contains_any<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v C::Value>,
        C::Value: 'v,
    {
        self.read(|set| set.contains_any(values))
    }
}

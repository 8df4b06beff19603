//! Binary-heap priority queue
//!
//! Positions are 1-based so the usual arithmetic holds: the parent of `p` is
//! `p / 2` and its children are `2p` and `2p + 1`. Position `p` lives at
//! vector index `p - 1`.
//!
//! ```text
//!  position:      1
//!               /   \
//!              2     3          items: [ p1 | p2 | p3 | p4 | p5 | p6 ]
//!             / \   /           index:    0    1    2    3    4    5
//!            4   5 6
//! ```
//!
//! Invariant: for every position `p > 1`,
//! `compare(items[parent(p)], items[p]) != RightHigher`.

use crate::compare::{Comparator, Natural, Priority};
use crate::containers::api::{Container, Entries, Enumerable, Queue, Unsynchronized};
use crate::containers::write_joined;
use std::fmt;

fn parent(position: usize) -> usize {
    position / 2
}

fn left_child(position: usize) -> usize {
    position * 2
}

fn right_child(position: usize) -> usize {
    position * 2 + 1
}

/// Priority queue ordered by a [`Comparator`]
///
/// `pop` and `peek` return the highest-priority element. With the default
/// [`Natural`] comparator that is the greatest element (a max-heap); use
/// [`OppositeNatural`](crate::compare::OppositeNatural) for a min-heap.
///
/// ```
/// use containerkit::containers::api::*;
/// use containerkit::queue::HeapPq;
///
/// let heap: HeapPq<i32> = [100, 1145, -202, 5, 6, 7].into_iter().collect();
/// assert_eq!(heap.peek(), Some(1145));
/// assert_eq!(heap.into_sorted_vec(), vec![1145, 100, 7, 6, 5, -202]);
/// ```
#[derive(Debug, Clone)]
pub struct HeapPq<T, C = Natural> {
    items: Vec<T>,
    comparator: C,
}

impl<T: PartialOrd> HeapPq<T, Natural> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: PartialOrd> Default for HeapPq<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> HeapPq<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Highest-priority element, without removing it
    pub fn peek_ref(&self) -> Option<&T> {
        self.items.first()
    }

    /// Elements in priority order, without modifying the heap
    pub fn iter_ordered(&self) -> OrderedIter<'_, T, C> {
        let mut frontier = HeapPq::with_comparator(PositionOrder { heap: self });
        if !self.items.is_empty() {
            frontier.push_value(1);
        }
        OrderedIter {
            heap: self,
            frontier,
        }
    }

    /// Drain the heap in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(value) = self.pop_top() {
            sorted.push(value);
        }
        sorted
    }

    /// Verify the parent/child rule at every position
    pub fn check_invariant(&self) -> bool {
        (2..=self.items.len()).all(|position| {
            self.comparator.compare(self.at(parent(position)), self.at(position))
                != Priority::RightHigher
        })
    }

    fn at(&self, position: usize) -> &T {
        &self.items[position - 1]
    }

    fn is_higher(&self, position: usize, than: usize) -> bool {
        self.comparator.compare(self.at(position), self.at(than)) == Priority::LeftHigher
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a - 1, b - 1);
    }

    fn push_value(&mut self, value: T) {
        self.items.push(value);
        self.percolate_up(self.items.len());
    }

    fn pop_top(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len();
        self.swap(1, last);
        let top = self.items.pop();
        self.percolate_down(1);
        top
    }

    fn percolate_up(&mut self, mut position: usize) {
        while position > 1 {
            let parent = parent(position);
            if !self.is_higher(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn percolate_down(&mut self, mut position: usize) {
        let size = self.items.len();
        loop {
            let left = left_child(position);
            if left > size {
                break;
            }
            // Ties between the children go to the right child
            let right = right_child(position);
            let child = if right <= size && !self.is_higher(left, right) {
                right
            } else {
                left
            };
            if !self.is_higher(child, position) {
                break;
            }
            self.swap(child, position);
            position = child;
        }
    }
}

/// Orders heap positions by the elements stored at them
struct PositionOrder<'a, T, C> {
    heap: &'a HeapPq<T, C>,
}

impl<T, C: Comparator<T>> Comparator<usize> for PositionOrder<'_, T, C> {
    fn compare(&self, left: &usize, right: &usize) -> Priority {
        self.heap
            .comparator
            .compare(self.heap.at(*left), self.heap.at(*right))
    }
}

/// Priority-order traversal of a [`HeapPq`]
///
/// The root is the highest-priority element; each time a position is
/// yielded its children become candidates. The candidates are kept in a
/// second heap ordered by the same comparator, so each step is O(log n).
pub struct OrderedIter<'a, T, C> {
    heap: &'a HeapPq<T, C>,
    frontier: HeapPq<usize, PositionOrder<'a, T, C>>,
}

impl<'a, T, C: Comparator<T>> Iterator for OrderedIter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.frontier.pop_top()?;
        let size = self.heap.items.len();
        for child in [left_child(position), right_child(position)] {
            if child <= size {
                self.frontier.push_value(child);
            }
        }
        Some(self.heap.at(position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.heap.items.len()))
    }
}

impl<T, C> Unsynchronized for HeapPq<T, C> {}

impl<T, C: Comparator<T>> Container for HeapPq<T, C> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        log::debug!("clearing heap of {} items", self.items.len());
        self.items.clear();
    }
}

impl<T, C: Comparator<T>> Queue for HeapPq<T, C> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.push_value(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_top()
    }

    fn peek_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.items.first().map(f)
    }
}

/// Enumerates `(rank, element)` in priority order
impl<T, C: Comparator<T>> Enumerable for HeapPq<T, C> {
    type Key = usize;
    type Value = T;

    fn entries(&self) -> Entries<'_, usize, T> {
        Box::new(self.iter_ordered().enumerate())
    }
}

impl<T: PartialOrd> FromIterator<T> for HeapPq<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Comparator<T>> Extend<T> for HeapPq<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_value(value);
        }
    }
}

impl<T: fmt::Display, C: Comparator<T>> fmt::Display for HeapPq<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HeapPQ")?;
        write_joined(f, self.iter_ordered())
    }
}

/// Builds a [`HeapPq`] with a comparator and an initial batch
///
/// ```
/// use containerkit::compare::OppositeNatural;
/// use containerkit::containers::api::*;
/// use containerkit::queue::HeapPqBuilder;
///
/// let mut heap = HeapPqBuilder::new(OppositeNatural::default())
///     .add_items([5, 1, 3])
///     .build();
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub struct HeapPqBuilder<T, C> {
    comparator: C,
    items: Vec<T>,
}

impl<T, C: Comparator<T>> HeapPqBuilder<T, C> {
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            items: Vec::new(),
        }
    }

    pub fn add_items<I: IntoIterator<Item = T>>(mut self, items: I) -> Self {
        self.items.extend(items);
        self
    }

    pub fn build(self) -> HeapPq<T, C> {
        let mut heap = HeapPq::with_comparator(self.comparator);
        heap.items.reserve(self.items.len());
        heap.extend(self.items);
        log::debug!("built heap with {} items", heap.len());
        heap
    }
}

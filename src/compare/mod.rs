//! Three-way priority comparison
//!
//! Ordered containers ask a [`Comparator`] which of two values has the
//! higher priority. The answer is a [`Priority`] rather than an
//! [`Ordering`], because "higher priority" is not always "greater": a
//! min-heap is a heap whose comparator ranks smaller values higher.
//!
//! A comparator must be consistent for as long as a container uses it
//! (transitive, and asymmetric apart from `Equal`). Containers do not check
//! this; an inconsistent comparator silently breaks their ordering.
//!
//! ```
//! use containerkit::compare::{opposite, Comparator, Natural, Priority};
//!
//! assert_eq!(Natural.compare(&3, &1), Priority::LeftHigher);
//! assert_eq!(opposite(Natural).compare(&3, &1), Priority::RightHigher);
//! ```

use std::cmp::Ordering;
use strum_macros::{Display, EnumIter};

/// Verdict of comparing a left value against a right value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Priority {
    LeftHigher,
    Equal,
    RightHigher,
}

impl Priority {
    /// Swap `LeftHigher` and `RightHigher`; `Equal` is unchanged
    pub fn reverse(self) -> Self {
        match self {
            Priority::LeftHigher => Priority::RightHigher,
            Priority::Equal => Priority::Equal,
            Priority::RightHigher => Priority::LeftHigher,
        }
    }
}

impl From<Ordering> for Priority {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Priority::LeftHigher,
            Ordering::Equal => Priority::Equal,
            Ordering::Less => Priority::RightHigher,
        }
    }
}

/// Decides which of two values has the higher priority
pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Priority;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Priority,
{
    fn compare(&self, left: &T, right: &T) -> Priority {
        self(left, right)
    }
}

/// Natural order: the greater value has the higher priority
///
/// Incomparable pairs (a NaN against anything) compare `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    fn compare(&self, left: &T, right: &T) -> Priority {
        left.partial_cmp(right).map_or(Priority::Equal, Priority::from)
    }
}

/// Inverts another comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Opposite<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Opposite<C> {
    fn compare(&self, left: &T, right: &T) -> Priority {
        self.0.compare(left, right).reverse()
    }
}

/// Natural order inverted: the smaller value has the higher priority
pub type OppositeNatural = Opposite<Natural>;

pub fn opposite<C>(comparator: C) -> Opposite<C> {
    Opposite(comparator)
}

/// Compare by a key derived from each value, in natural order of the key
///
/// ```
/// use containerkit::compare::{by_key, Comparator, Priority};
///
/// let by_len = by_key(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"short", &"longer"), Priority::RightHigher);
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Priority + Clone
where
    K: PartialOrd,
    F: Fn(&T) -> K + Clone,
{
    move |left: &T, right: &T| Natural.compare(&key(left), &key(right))
}

//! Cancellable lazy sequences
//!
//! `keys`, `values` and `items` hand out a [`Cancellable`] iterator rather
//! than spawning a producer per traversal. The consumer pulls elements one
//! at a time; the signal is checked before each element, so a traversal
//! stops at the first `next()` after the signal fires. Asking the container
//! again yields a fresh sequence from the beginning.

use crate::core::cancel::CancelSignal;
use std::iter::FusedIterator;

/// An iterator that ends early once its cancel signal fires
#[derive(Debug)]
pub struct Cancellable<I> {
    inner: I,
    signal: CancelSignal,
    stopped: bool,
}

impl<I> Cancellable<I> {
    pub fn new(inner: I, signal: CancelSignal) -> Self {
        Self {
            inner,
            signal,
            stopped: false,
        }
    }

    /// True if the sequence ended because the signal fired
    pub fn was_cancelled(&self) -> bool {
        self.stopped
    }
}

impl<I: Iterator> Iterator for Cancellable<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        if self.signal.is_cancelled() {
            log::trace!("lazy sequence stopped by cancel signal");
            self.stopped = true;
            return None;
        }
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stopped {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

impl<I: FusedIterator> FusedIterator for Cancellable<I> {}

//! Unordered array baseline
//!
//! Elements are kept in insertion order; `top` and `pop` scan for the most
//! extreme element. Useful as a reference implementation and for very small
//! queues.

use crate::compare::{Comparator, Less};
use crate::traits::PriorityQueue;
use std::fmt;

/// A `Vec`-backed queue that searches for the top on demand
pub struct UnorderedPQ<T, C = Less> {
    data: Vec<T>,
    comp: C,
}

impl<T, C: Comparator<T>> UnorderedPQ<T, C> {
    fn extreme_index(&self) -> Option<usize> {
        let mut indices = 0..self.data.len();
        let first = indices.next()?;
        Some(indices.fold(first, |best, i| {
            if self.comp.compare(&self.data[best], &self.data[i]) {
                i
            } else {
                best
            }
        }))
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> for UnorderedPQ<T, C> {
    fn with_comparator(comp: C) -> Self {
        Self {
            data: Vec::new(),
            comp,
        }
    }

    fn from_iter_with<I>(iter: I, comp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            data: iter.into_iter().collect(),
            comp,
        }
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        let index = self.extreme_index()?;
        Some(self.data.swap_remove(index))
    }

    fn top(&self) -> Option<&T> {
        self.extreme_index().map(|i| &self.data[i])
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    // Nothing is cached, so there is nothing to restore.
    fn update_priorities(&mut self) {}

    fn comparator(&self) -> &C {
        &self.comp
    }
}

impl<T, C> UnorderedPQ<T, C> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Ord> UnorderedPQ<T> {
    /// Creates an empty max-queue
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C: Comparator<T> + Default> Default for UnorderedPQ<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for UnorderedPQ<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C> Extend<T> for UnorderedPQ<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T: Clone, C: Clone> Clone for UnorderedPQ<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comp: self.comp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for UnorderedPQ<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedPQ").field("data", &self.data).finish()
    }
}

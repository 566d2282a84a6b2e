//! Sorted array variant
//!
//! Elements are kept ordered by the comparator with the most extreme element
//! last, so `top` and `pop` are O(1) while `push` pays O(n) for the shift.

use crate::compare::{Comparator, Less};
use crate::traits::PriorityQueue;
use std::fmt;

/// A `Vec`-backed queue kept in comparator order
pub struct SortedPQ<T, C = Less> {
    /// Ascending by `comp`; the top is `data.last()`
    data: Vec<T>,
    comp: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> for SortedPQ<T, C> {
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
        let mut pq = Self {
            data: iter.into_iter().collect(),
            comp,
        };
        pq.update_priorities();
        pq
    }

    fn push(&mut self, value: T) {
        // Insert after every element that does not outrank `value`
        let index = self
            .data
            .partition_point(|existing| !self.comp.compare(&value, existing));
        self.data.insert(index, value);
    }

    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    fn top(&self) -> Option<&T> {
        self.data.last()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn update_priorities(&mut self) {
        let comp = &self.comp;
        self.data.sort_by(|a, b| {
            if comp.compare(a, b) {
                std::cmp::Ordering::Less
            } else if comp.compare(b, a) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
    }

    fn comparator(&self) -> &C {
        &self.comp
    }
}

impl<T, C> SortedPQ<T, C> {
    /// Iterates from the least to the most extreme element
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Ord> SortedPQ<T> {
    /// Creates an empty max-queue
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C: Comparator<T> + Default> Default for SortedPQ<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for SortedPQ<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedPQ<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Clone, C: Clone> Clone for SortedPQ<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comp: self.comp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedPQ<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedPQ").field("data", &self.data).finish()
    }
}

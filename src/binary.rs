//! Binary Heap implementation
//!
//! A complete binary tree stored in a `Vec`, with the children of index `i`
//! at `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`. No handles are
//! handed out; the only way to change an element's priority is to mutate it
//! in place and call [`update_priorities`](PriorityQueue::update_priorities).
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `pop`               | O(log n)   |
//! | `top`               | O(1)       |
//! | `from_iter_with`    | O(n)       |
//! | `update_priorities` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use priority_queues::{BinaryPQ, PriorityQueue};
//!
//! let mut pq = BinaryPQ::new();
//! pq.push(5);
//! pq.push(2);
//! pq.push(10);
//!
//! assert_eq!(pq.top(), Some(&10));
//! assert_eq!(pq.pop(), Some(10));
//! assert_eq!(pq.pop(), Some(5));
//! assert_eq!(pq.pop(), Some(2));
//! assert_eq!(pq.pop(), None);
//! ```

use crate::compare::{Comparator, Less};
use crate::traits::PriorityQueue;
use log::trace;
use std::fmt;

/// An array-backed binary heap ordered by `C`
pub struct BinaryPQ<T, C = Less> {
    /// Heap-ordered elements; `data[0]` is the most extreme
    data: Vec<T>,
    comp: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> for BinaryPQ<T, C> {
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
        self.data.push(value);
        self.fix_up(self.data.len() - 1);
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.fix_down(0);
        }

        result
    }

    fn top(&self) -> Option<&T> {
        self.data.first()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn update_priorities(&mut self) {
        trace!("binary heap: rebuilding {} elements", self.data.len());
        // Leaves are trivially heaps; start from the last internal node.
        for index in (0..self.data.len() / 2).rev() {
            self.fix_down(index);
        }
    }

    fn comparator(&self) -> &C {
        &self.comp
    }
}

impl<T, C: Comparator<T>> BinaryPQ<T, C> {
    /// Move element at index up to maintain heap property
    fn fix_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.comp.compare(&self.data[parent], &self.data[index]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn fix_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut extreme = index;

            if left < len && self.comp.compare(&self.data[extreme], &self.data[left]) {
                extreme = left;
            }
            if right < len && self.comp.compare(&self.data[extreme], &self.data[right]) {
                extreme = right;
            }

            if extreme != index {
                self.data.swap(index, extreme);
                index = extreme;
            } else {
                break;
            }
        }
    }

    /// Consumes the heap, returning its elements in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }

    /// Checks the array-embedded heap order
    #[doc(hidden)]
    pub fn validate(&self) -> bool {
        (1..self.data.len()).all(|i| !self.comp.compare(&self.data[(i - 1) / 2], &self.data[i]))
    }
}

impl<T, C> BinaryPQ<T, C> {
    /// Iterates over the elements in heap-array order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements
    ///
    /// Changing an element's priority breaks heap order until
    /// [`update_priorities`](PriorityQueue::update_priorities) is called.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> BinaryPQ<T> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryPQ<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryPQ<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryPQ<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Clone, C: Clone> Clone for BinaryPQ<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comp: self.comp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryPQ<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryPQ").field("data", &self.data).finish()
    }
}

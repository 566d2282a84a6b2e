//! Ordering functors shared by every priority queue in this crate
//!
//! A [`Comparator`] is a strict weak order over the element type. The queues
//! interpret `compare(a, b) == true` as "`b` has higher priority than `a`",
//! so the default [`Less`] ordering yields a conventional max-queue and
//! [`Greater`] a min-queue.
//!
//! Any closure `Fn(&T, &T) -> bool` is a comparator as well, which is the
//! usual way to order elements that do not implement [`Ord`]:
//!
//! ```rust
//! use priority_queues::{BinaryPQ, PriorityQueue};
//!
//! let mut pq = BinaryPQ::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0 < b.0);
//! pq.push((2, 'b'));
//! pq.push((7, 'a'));
//! assert_eq!(pq.top(), Some(&(7, 'a')));
//! ```

use std::fmt;

/// A strict weak ordering over `T`
///
/// Implementations must be irreflexive (`compare(a, a)` is false) and
/// transitive. Equivalent elements compare false in both directions.
pub trait Comparator<T: ?Sized> {
    /// Returns true if `b` should leave the queue before `a`
    fn compare(&self, a: &T, b: &T) -> bool;
}

/// Natural ascending order; queues built with it pop the largest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: Ord + ?Sized> Comparator<T> for Less {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reversed order; queues built with it pop the smallest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Comparator<T> for Greater {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders elements by a key extracted from each of them
///
/// Unlike a bare closure, `ByKey` is nameable, so it can appear in struct
/// fields and type aliases.
#[derive(Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByKey").finish_non_exhaustive()
    }
}

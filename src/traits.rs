//! The shared priority-queue interface
//!
//! Every queue in this crate implements [`PriorityQueue`], which fixes
//! construction (with a comparator, optionally bulk-loaded from an iterator)
//! and the handful of query/mutation operations callers depend on. The trait
//! is object safe, so a queue can be chosen at runtime and used through
//! `Box<dyn PriorityQueue<T, C>>` (see [`PqKind`](crate::kind::PqKind)).
//!
//! Queues that hand out node handles additionally implement
//! [`AddressableQueue`], whose operations report misuse through [`HeapError`].

use crate::compare::Comparator;
use std::fmt;

/// Error type for handle-based heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new value is not more extreme than the current one
    PriorityNotRaised,
    /// The handle is no longer valid (element was removed)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::PriorityNotRaised => {
                write!(f, "new value is not more extreme than the current value")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in a queue, used for in-place priority updates
///
/// This is an opaque type that identifies a specific live element.
pub trait Handle: Copy + PartialEq + Eq + fmt::Debug {}

/// Priority queue ordered by a caller-supplied [`Comparator`]
///
/// The element for which no other element compares "more extreme" sits at
/// the top: `compare(a, b) == true` means `b` outranks `a`. With the default
/// [`Less`](crate::compare::Less) comparator this is a max-queue.
///
/// # Example
///
/// ```rust
/// use priority_queues::{PriorityQueue, BinaryPQ, Less};
///
/// let mut pq = BinaryPQ::from_iter_with([3, 1, 4, 1, 5], Less);
/// assert_eq!(pq.top(), Some(&5));
/// assert_eq!(pq.pop(), Some(5));
/// assert_eq!(pq.pop(), Some(4));
/// assert_eq!(pq.len(), 3);
/// ```
pub trait PriorityQueue<T, C: Comparator<T>> {
    /// Creates an empty queue ordered by `comp`
    ///
    /// # Time Complexity
    /// O(1)
    fn with_comparator(comp: C) -> Self
    where
        Self: Sized;

    /// Creates a queue holding every element of `iter`, ordered by `comp`
    ///
    /// # Time Complexity
    /// O(n) for the binary and pairing heaps.
    fn from_iter_with<I>(iter: I, comp: C) -> Self
    where
        I: IntoIterator<Item = T>,
        Self: Sized;

    /// Inserts one element
    fn push(&mut self, value: T);

    /// Removes and returns the most extreme element
    ///
    /// Returns `None` and leaves the queue untouched when it is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns the most extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1) for all implementations except [`UnorderedPQ`](crate::unordered::UnorderedPQ).
    fn top(&self) -> Option<&T>;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restores queue order after elements were changed in place
    ///
    /// Callers that mutate elements through interior mutability, `iter_mut`
    /// or a handle must call this before the next `top` or `pop`. The set of
    /// stored elements is not changed, and issued handles stay valid.
    ///
    /// # Time Complexity
    /// O(n) for the binary and pairing heaps.
    fn update_priorities(&mut self);

    /// Returns the comparator this queue was built with
    fn comparator(&self) -> &C;

    /// Invokes the comparator; true if `b` outranks `a`
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        self.comparator().compare(a, b)
    }
}

/// Priority queue whose elements can be addressed after insertion
///
/// This trait extends [`PriorityQueue`] with operations that require tracking
/// element handles:
/// - `add_node` returns a handle that can be used with `update_elt`
/// - `update_elt` raises an element's priority in place
///
/// # Example
///
/// ```rust
/// use priority_queues::{AddressableQueue, PairingPQ, PriorityQueue};
///
/// let mut pq = PairingPQ::from_iter_with([0, 1, 2, 10, 7], priority_queues::Less);
/// let handle = pq.add_node(5);
/// pq.update_elt(handle, 20).unwrap();
/// assert_eq!(pq.top(), Some(&20));
/// ```
pub trait AddressableQueue<T, C: Comparator<T>>: PriorityQueue<T, C> {
    /// The handle type for this queue
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    ///
    /// The handle stays valid until the element is removed by `pop`.
    fn add_node(&mut self, value: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a more extreme value
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element was already removed,
    /// and `HeapError::PriorityNotRaised` (leaving the element unchanged) if
    /// `new_value` does not outrank the current value.
    fn update_elt(&mut self, handle: Self::Handle, new_value: T) -> Result<(), HeapError>;
}

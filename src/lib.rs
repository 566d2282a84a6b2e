//! Priority Queues for Rust
//!
//! This crate provides a family of priority queues sharing one
//! comparator-driven interface, [`PriorityQueue`]:
//!
//! - **Pairing Heap** ([`PairingPQ`]): O(1) insert and meld; O(log n) amortized pop;
//!   handle-based in-place priority raises via [`AddressableQueue`]
//! - **Binary Heap** ([`BinaryPQ`]): O(log n) push and pop on a flat array
//! - **Sorted array** ([`SortedPQ`]): O(1) pop, O(n) push
//! - **Unordered array** ([`UnorderedPQ`]): O(1) push, O(n) pop
//!
//! Every queue is ordered by a [`Comparator`]; the default [`Less`] yields a
//! max-queue. Elements may be changed in place and the order restored with
//! [`update_priorities`](PriorityQueue::update_priorities).
//!
//! # Example
//!
//! ```rust
//! use priority_queues::{AddressableQueue, PairingPQ, PriorityQueue};
//!
//! let mut pq = PairingPQ::new();
//! pq.push(5);
//! let handle = pq.add_node(3);
//! pq.update_elt(handle, 9).unwrap();
//! assert_eq!(pq.top(), Some(&9));
//! ```

pub mod binary;
pub mod compare;
pub mod kind;
pub mod pairing;
pub mod sorted;
pub mod traits;
pub mod unordered;

#[doc(hidden)]
pub mod testing;

// Re-export the main types for convenience
pub use binary::BinaryPQ;
pub use compare::{ByKey, Comparator, Greater, Less};
pub use kind::{ParseKindError, PqKind};
pub use pairing::{PairingHandle, PairingPQ};
pub use sorted::SortedPQ;
pub use traits::{AddressableQueue, Handle, HeapError, PriorityQueue};
pub use unordered::UnorderedPQ;

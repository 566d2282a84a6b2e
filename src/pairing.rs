//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) insert and meld
//! - O(log n) amortized pop
//! - cheap in-place priority raises through node handles (`update_elt`)
//!
//! Nodes live in a [`SlotMap`] arena owned by the queue. Each node links to
//! its leftmost child, its next sibling, and `prev`: the parent for a leftmost
//! child, the previous sibling otherwise. `prev` lets a node be excised from
//! its sibling list in O(1) and tells in O(1) whether a node is the root (the
//! root is the only node without `prev`).
//!
//! Handles are generational arena keys. A node never moves once allocated, so
//! a handle stays valid until `pop` removes its node, and using it afterwards
//! is reported as [`HeapError::InvalidHandle`] instead of touching a reused
//! slot.

use crate::compare::{Comparator, Less};
use crate::traits::{AddressableQueue, Handle, HeapError, PriorityQueue};
use log::trace;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

new_key_type! {
    struct NodeKey;
}

/// Handle to an element in a Pairing heap
///
/// Note: This handle is tied to the heap that issued it. Passing it to a
/// different heap is a logic error: it may be rejected or may address an
/// unrelated element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    key: NodeKey,
}

impl Handle for PairingHandle {}

struct Node<T> {
    elt: T,
    child: Option<NodeKey>,
    sibling: Option<NodeKey>,
    prev: Option<NodeKey>, // parent if leftmost child, otherwise previous sibling
}

impl<T> Node<T> {
    fn new(elt: T) -> Self {
        Self {
            elt,
            child: None,
            sibling: None,
            prev: None,
        }
    }
}

/// Pairing Heap ordered by `C`
///
/// # Example
///
/// ```rust
/// use priority_queues::{AddressableQueue, PairingPQ, PriorityQueue};
///
/// let mut pq = PairingPQ::new();
/// pq.push(3);
/// let handle = pq.add_node(1);
/// assert_eq!(pq.top(), Some(&3));
///
/// pq.update_elt(handle, 8).unwrap();
/// assert_eq!(pq.top(), Some(&8));
/// assert_eq!(pq.pop(), Some(8));
/// assert!(pq.get(handle).is_none());
/// ```
pub struct PairingPQ<T, C = Less> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
    comp: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> for PairingPQ<T, C> {
    fn with_comparator(comp: C) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            comp,
        }
    }

    fn from_iter_with<I>(iter: I, comp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut pq = Self {
            nodes: SlotMap::with_capacity_and_key(iter.size_hint().0),
            root: None,
            comp,
        };
        for value in iter {
            pq.add_node(value);
        }
        pq
    }

    fn push(&mut self, value: T) {
        self.add_node(value);
    }

    fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let node = self.nodes.remove(root)?;

        self.root = self.combine_siblings(node.child);
        Some(node.elt)
    }

    fn top(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].elt)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn update_priorities(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };
        trace!("pairing heap: rebuilding {} nodes", self.nodes.len());

        // Breadth-first over the old tree. Every visited node is stripped of
        // its links before being melded, so the old tree is only ever read
        // through nodes still in the worklist.
        let mut worklist = VecDeque::with_capacity(self.nodes.len());
        worklist.push_back(root);
        let mut rebuilt = None;

        while let Some(key) = worklist.pop_front() {
            let node = &mut self.nodes[key];
            if let Some(sibling) = node.sibling.take() {
                worklist.push_back(sibling);
            }
            if let Some(child) = node.child.take() {
                worklist.push_back(child);
            }
            node.prev = None;

            rebuilt = Some(match rebuilt {
                Some(tree) => self.meld(tree, key),
                None => key,
            });
        }

        self.root = rebuilt;
    }

    fn comparator(&self) -> &C {
        &self.comp
    }
}

impl<T, C: Comparator<T>> AddressableQueue<T, C> for PairingPQ<T, C> {
    type Handle = PairingHandle;

    fn add_node(&mut self, value: T) -> PairingHandle {
        let key = self.nodes.insert(Node::new(value));
        self.root = Some(match self.root {
            Some(root) => self.meld(root, key),
            None => key,
        });
        PairingHandle { key }
    }

    fn update_elt(&mut self, handle: PairingHandle, new_value: T) -> Result<(), HeapError> {
        let key = handle.key;
        let node = self.nodes.get_mut(key).ok_or(HeapError::InvalidHandle)?;

        if !self.comp.compare(&node.elt, &new_value) {
            return Err(HeapError::PriorityNotRaised);
        }
        node.elt = new_value;

        // The root has no parent to outrank
        let Some(parent) = self.parent_of(key) else {
            return Ok(());
        };
        if !self.comp.compare(&self.nodes[parent].elt, &self.nodes[key].elt) {
            return Ok(());
        }

        trace!("pairing heap: cutting raised node and melding with root");
        self.cut(key);
        if let Some(root) = self.root {
            self.root = Some(self.meld(root, key));
        }
        Ok(())
    }
}

impl<T, C: Comparator<T>> PairingPQ<T, C> {
    /// Melds two detached trees, returning the new root
    ///
    /// The loser becomes the leftmost child of the winner. When neither root
    /// outranks the other, `a` stays on top.
    fn meld(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        let (winner, loser) = if self.comp.compare(&self.nodes[a].elt, &self.nodes[b].elt) {
            (b, a)
        } else {
            (a, b)
        };

        let first_child = self.nodes[winner].child;
        let loser_node = &mut self.nodes[loser];
        loser_node.sibling = first_child;
        loser_node.prev = Some(winner);
        if let Some(child) = first_child {
            self.nodes[child].prev = Some(loser);
        }
        self.nodes[winner].child = Some(loser);
        winner
    }

    /// Combines a sibling list into one tree with the two-pass pairing scheme
    ///
    /// The first pass melds adjacent pairs left to right; the second melds
    /// the results right to left into a single tree.
    fn combine_siblings(&mut self, first: Option<NodeKey>) -> Option<NodeKey> {
        let mut pairs: SmallVec<[NodeKey; 16]> = SmallVec::new();
        let mut current = first;

        while let Some(a) = current {
            match self.detach(a) {
                Some(b) => {
                    current = self.detach(b);
                    pairs.push(self.meld(a, b));
                }
                None => {
                    pairs.push(a);
                    current = None;
                }
            }
        }
        if pairs.len() > 1 {
            trace!("pairing heap: combining {} subtrees", pairs.len());
        }

        let mut result = pairs.pop()?;
        while let Some(tree) = pairs.pop() {
            result = self.meld(tree, result);
        }
        Some(result)
    }

    /// Clears a node's sibling-list links, returning its former next sibling
    fn detach(&mut self, key: NodeKey) -> Option<NodeKey> {
        let node = &mut self.nodes[key];
        node.prev = None;
        node.sibling.take()
    }

    /// Finds a node's parent by walking back to the leftmost sibling
    fn parent_of(&self, key: NodeKey) -> Option<NodeKey> {
        let mut current = key;
        while let Some(prev) = self.nodes[current].prev {
            if self.nodes[prev].child == Some(current) {
                return Some(prev);
            }
            current = prev;
        }
        None
    }

    /// Cuts a node (with its subtree) out of its parent's child list
    fn cut(&mut self, key: NodeKey) {
        let node = &mut self.nodes[key];
        let sibling = node.sibling.take();
        let Some(prev) = node.prev.take() else {
            return;
        };

        let prev_node = &mut self.nodes[prev];
        if prev_node.child == Some(key) {
            prev_node.child = sibling;
        } else {
            prev_node.sibling = sibling;
        }
        if let Some(sibling) = sibling {
            self.nodes[sibling].prev = Some(prev);
        }
    }

    /// Moves every element of `other` into this heap
    ///
    /// Handles issued by `other` are not valid for `self`.
    pub fn merge(&mut self, other: Self) {
        trace!("pairing heap: merging {} nodes", other.nodes.len());
        self.nodes.reserve(other.nodes.len());
        for (_, node) in other.nodes {
            self.add_node(node.elt);
        }
    }

    /// Checks heap order and link consistency over the whole tree
    #[doc(hidden)]
    pub fn validate(&self) -> bool {
        let Some(root) = self.root else {
            return self.nodes.is_empty();
        };
        if self.nodes[root].prev.is_some() || self.nodes[root].sibling.is_some() {
            return false;
        }

        let mut seen = 0;
        let mut worklist = vec![root];
        while let Some(parent) = worklist.pop() {
            seen += 1;
            let mut expected_prev = parent;
            let mut current = self.nodes[parent].child;
            while let Some(child) = current {
                let node = &self.nodes[child];
                if node.prev != Some(expected_prev)
                    || self.comp.compare(&self.nodes[parent].elt, &node.elt)
                {
                    return false;
                }
                worklist.push(child);
                expected_prev = child;
                current = node.sibling;
            }
        }
        seen == self.nodes.len()
    }
}

impl<T, C> PairingPQ<T, C> {
    /// Returns the element behind `handle`, or `None` if it was popped
    pub fn get(&self, handle: PairingHandle) -> Option<&T> {
        self.nodes.get(handle.key).map(|node| &node.elt)
    }

    /// Returns the element behind `handle` mutably
    ///
    /// Changing its priority breaks heap order until
    /// [`update_priorities`](PriorityQueue::update_priorities) is called.
    pub fn get_mut(&mut self, handle: PairingHandle) -> Option<&mut T> {
        self.nodes.get_mut(handle.key).map(|node| &mut node.elt)
    }

    /// Returns true if the element behind `handle` is still in the heap
    pub fn contains(&self, handle: PairingHandle) -> bool {
        self.nodes.contains_key(handle.key)
    }

    /// Iterates over the elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.elt)
    }

    /// Iterates mutably over the elements in arbitrary order
    ///
    /// Changing an element's priority breaks heap order until
    /// [`update_priorities`](PriorityQueue::update_priorities) is called.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.nodes.values_mut().map(|node| &mut node.elt)
    }

    /// Removes every element, invalidating all handles
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<T: Ord> PairingPQ<T> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C: Comparator<T> + Default> Default for PairingPQ<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PairingPQ<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PairingPQ<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}

/// Deep copy: every value is pushed into a fresh heap, so the copy is heap
/// ordered but its tree shape and handles are unrelated to the source.
impl<T: Clone, C: Comparator<T> + Clone> Clone for PairingPQ<T, C> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            nodes: SlotMap::with_capacity_and_key(self.nodes.len()),
            root: None,
            comp: self.comp.clone(),
        };

        let mut worklist: VecDeque<NodeKey> = self.root.into_iter().collect();
        while let Some(key) = worklist.pop_front() {
            let node = &self.nodes[key];
            if let Some(sibling) = node.sibling {
                worklist.push_back(sibling);
            }
            if let Some(child) = node.child {
                worklist.push_back(child);
            }
            copy.add_node(node.elt.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        std::mem::swap(self, &mut copy);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingPQ<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingPQ")
            .field("len", &self.nodes.len())
            .field("top", &self.root.map(|root| &self.nodes[root].elt))
            .finish()
    }
}

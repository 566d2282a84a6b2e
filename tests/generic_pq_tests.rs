//! Generic tests for all PriorityQueue implementations
//!
//! These tests work with any PriorityQueue implementation and exercise the
//! trait interface with the scenarios every queue must agree on.

use priority_queues::testing::init_test;
use priority_queues::{
    BinaryPQ, ByKey, Greater, Less, PairingPQ, PriorityQueue, SortedPQ, UnorderedPQ,
};
use std::cell::Cell;
use std::rc::Rc;

/// Test that an empty queue behaves correctly
fn test_empty_queue<H: PriorityQueue<i32, Less>>() {
    let mut pq = H::with_comparator(Less);
    assert!(pq.is_empty());
    assert_eq!(pq.len(), 0);
    assert_eq!(pq.top(), None);
    assert_eq!(pq.pop(), None);
    assert!(pq.is_empty());
}

/// Push 5, 2, 10, 3 and follow the top
fn test_push_pop_sequence<H: PriorityQueue<i32, Less>>() {
    let mut pq = H::with_comparator(Less);
    let mut tops = Vec::new();
    for value in [5, 2, 10, 3] {
        pq.push(value);
        tops.push(*pq.top().unwrap());
    }
    assert_eq!(tops, vec![5, 5, 10, 10]);

    pq.pop();
    pq.pop();
    assert_eq!(pq.top(), Some(&3));
    assert_eq!(pq.len(), 1);
}

/// Building from a range and draining must match a direct sort
fn test_range_round_trip<H: PriorityQueue<i32, Less>>() {
    let values = vec![17, -4, 8, 8, 0, 33, 12, -4, 5, 21, 1];
    let mut pq = H::from_iter_with(values.iter().copied(), Less);
    assert_eq!(pq.len(), values.len());

    let mut expected = values;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    let drained: Vec<i32> = std::iter::from_fn(|| pq.pop()).collect();
    assert_eq!(drained, expected);
}

/// A min-ordering comparator reverses the drain order
fn test_min_ordering<H: PriorityQueue<i32, Greater>>() {
    let mut pq = H::from_iter_with([9, 4, 7, 1, 8], Greater);
    assert_eq!(pq.top(), Some(&1));
    let drained: Vec<i32> = std::iter::from_fn(|| pq.pop()).collect();
    assert_eq!(drained, vec![1, 4, 7, 8, 9]);
}

/// Elements behind shared cells are mutated, then the order is restored
fn test_update_priorities<H, C>(comp: C)
where
    H: PriorityQueue<Rc<Cell<i32>>, C>,
    C: priority_queues::Comparator<Rc<Cell<i32>>>,
{
    let cells: Vec<Rc<Cell<i32>>> = (0..40).map(|i| Rc::new(Cell::new(i))).collect();
    let mut pq = H::with_comparator(comp);
    for cell in &cells {
        pq.push(Rc::clone(cell));
    }

    for (i, cell) in cells.iter().enumerate() {
        cell.set((i as i32 * 17) % 41);
    }
    pq.update_priorities();
    assert_eq!(pq.top().map(|c| c.get()), Some(40));

    // Nothing changed since: a second rebuild is a no-op
    pq.update_priorities();
    assert_eq!(pq.top().map(|c| c.get()), Some(40));
    assert_eq!(pq.len(), 40);

    let drained: Vec<i32> = std::iter::from_fn(|| pq.pop()).map(|c| c.get()).collect();
    let mut expected: Vec<i32> = cells.iter().map(|c| c.get()).collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drained, expected);
}

/// Elements that carry a payload are ordered by key only
fn test_keyed_elements<H, F>(comp: ByKey<F>)
where
    H: PriorityQueue<(u32, &'static str), ByKey<F>>,
    F: Fn(&(u32, &'static str)) -> u32,
{
    let mut pq = H::with_comparator(comp);
    pq.push((2, "two"));
    pq.push((9, "nine"));
    pq.push((4, "four"));
    assert_eq!(pq.pop(), Some((9, "nine")));
    assert_eq!(pq.pop(), Some((4, "four")));
    assert_eq!(pq.pop(), Some((2, "two")));
}

fn key_of(pair: &(u32, &'static str)) -> u32 {
    pair.0
}

fn cell_less(a: &Rc<Cell<i32>>, b: &Rc<Cell<i32>>) -> bool {
    a.get() < b.get()
}

type CellLess = fn(&Rc<Cell<i32>>, &Rc<Cell<i32>>) -> bool;
type PairKey = fn(&(u32, &'static str)) -> u32;

macro_rules! generic_tests {
    ($module:ident, $pq:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_queue() {
                init_test();
                test_empty_queue::<$pq<i32>>();
            }

            #[test]
            fn push_pop_sequence() {
                test_push_pop_sequence::<$pq<i32>>();
            }

            #[test]
            fn range_round_trip() {
                test_range_round_trip::<$pq<i32>>();
            }

            #[test]
            fn min_ordering() {
                test_min_ordering::<$pq<i32, Greater>>();
            }

            #[test]
            fn update_priorities() {
                init_test();
                test_update_priorities::<$pq<Rc<Cell<i32>>, CellLess>, CellLess>(cell_less);
            }

            #[test]
            fn keyed_elements() {
                test_keyed_elements::<$pq<(u32, &'static str), ByKey<PairKey>>, PairKey>(ByKey(key_of as PairKey));
            }
        }
    };
}

generic_tests!(unordered, UnorderedPQ);
generic_tests!(sorted, SortedPQ);
generic_tests!(binary, BinaryPQ);
generic_tests!(pairing, PairingPQ);

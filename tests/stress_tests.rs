//! Stress tests with large and badly skewed inputs
//!
//! Ascending pushes into a max pairing heap build a chain as deep as the heap
//! is large; these tests make sure copy, rebuild and drop never recurse over
//! that depth.

use priority_queues::{AddressableQueue, BinaryPQ, Greater, PairingPQ, PriorityQueue};

const DEEP: i32 = 200_000;

#[test]
fn test_deep_chain_drop() {
    let mut pq = PairingPQ::new();
    for i in 0..DEEP {
        pq.push(i);
    }
    assert_eq!(pq.len(), DEEP as usize);
    assert_eq!(pq.top(), Some(&(DEEP - 1)));
    drop(pq);
}

#[test]
fn test_deep_chain_clone_and_rebuild() {
    let mut pq = PairingPQ::new();
    for i in 0..DEEP {
        pq.push(i);
    }

    let mut copy = pq.clone();
    assert_eq!(copy.len(), pq.len());
    assert_eq!(copy.top(), pq.top());

    pq.update_priorities();
    assert!(pq.validate());
    assert_eq!(pq.top(), Some(&(DEEP - 1)));

    assert_eq!(copy.pop(), Some(DEEP - 1));
    assert_eq!(pq.len(), DEEP as usize);
}

#[test]
fn test_massive_operations() {
    let mut pq = PairingPQ::with_comparator(Greater);
    for i in (0..10_000).rev() {
        pq.push(i);
    }
    for i in 0..10_000 {
        assert_eq!(pq.pop(), Some(i));
    }
    assert!(pq.is_empty());
}

#[test]
fn test_many_update_elts() {
    let mut pq = PairingPQ::new();
    let handles: Vec<_> = (0..5_000).map(|i| pq.add_node(i)).collect();

    // Raise every element past all the others, in reverse
    for (i, &handle) in handles.iter().enumerate().rev() {
        pq.update_elt(handle, 10_000 + (5_000 - i as i32)).unwrap();
    }
    assert!(pq.validate());

    for i in 0..5_000 {
        assert_eq!(pq.pop(), Some(10_000 + (5_000 - i)));
    }
}

#[test]
fn test_alternating_ops() {
    let mut pairing = PairingPQ::new();
    let mut binary = BinaryPQ::new();

    for i in 0..2_000 {
        let value = (i * 7919) % 1_009;
        pairing.push(value);
        binary.push(value);
        if i % 3 == 0 {
            assert_eq!(pairing.pop(), binary.pop());
        }
        assert_eq!(pairing.top(), binary.top());
    }

    pairing.update_priorities();
    binary.update_priorities();
    while let Some(value) = binary.pop() {
        assert_eq!(pairing.pop(), Some(value));
    }
    assert!(pairing.is_empty());
}

#[test]
fn test_binary_bulk_build() {
    let pq: BinaryPQ<i64> = (0..100_000i64).map(|i| (i * 104_729) % 100_003).collect();
    assert!(pq.validate());
    let sorted = pq.into_sorted_vec();
    assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
}

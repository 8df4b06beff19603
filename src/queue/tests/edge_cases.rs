//! Degenerate inputs for the queue containers

use crate::compare::{Natural, Priority};
use crate::containers::api::*;
use crate::queue::{BlockingQueue, BlockingQueueBuilder, HeapPq, HeapPqBuilder, LinkedQueue};

#[test]
fn test_empty_queues_report_absence() {
    let mut heap: HeapPq<i32> = HeapPq::new();
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.peek_ref(), None);
    assert_eq!(heap.iter_ordered().count(), 0);
    assert!(heap.check_invariant());

    let mut linked: LinkedQueue<i32> = LinkedQueue::new();
    assert_eq!(linked.pop(), None);
    assert_eq!(linked.peek(), None);

    let blocking: BlockingQueue<i32> = BlockingQueue::new(3);
    assert_eq!(blocking.pop(), None);
    assert_eq!(blocking.peek(), None);
    assert!(blocking.snapshot().is_empty());
}

#[test]
fn test_zero_capacity_queue_accepts_nothing() {
    let queue = BlockingQueue::new(0);

    assert_eq!(queue.capacity(), 0);
    assert_eq!(queue.try_push(1), Err(1));
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.available_permits(), 0);

    let built = BlockingQueueBuilder::new(0).add_items([1, 2, 3]).build();
    assert!(built.is_empty());
}

#[test]
fn test_single_element_heap() {
    let mut heap: HeapPq<&str> = ["only"].into_iter().collect();

    assert!(heap.check_invariant());
    assert_eq!(heap.to_string(), "HeapPQ\nonly");
    assert_eq!(heap.pop(), Some("only"));
    assert!(heap.is_empty());
    assert_eq!(heap.to_string(), "HeapPQ\n");
}

#[test]
fn test_duplicates_are_kept() {
    let heap: HeapPq<i32> = [5, 5, 5, 1, 5].into_iter().collect();

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.into_sorted_vec(), vec![5, 5, 5, 5, 1]);
}

#[test]
fn test_constant_comparator_never_breaks_the_heap() {
    let all_equal = |_: &u8, _: &u8| Priority::Equal;
    let mut heap = HeapPqBuilder::new(all_equal).add_items(0..20).build();

    assert!(heap.check_invariant());
    let mut popped = 0;
    while heap.pop().is_some() {
        popped += 1;
        assert!(heap.check_invariant());
    }
    assert_eq!(popped, 20);
}

#[test]
fn test_nan_is_tolerated_by_natural_order() {
    let mut heap = HeapPqBuilder::new(Natural)
        .add_items([1.0, f64::NAN, 3.0, 2.0])
        .build();

    assert_eq!(heap.len(), 4);
    let mut drained = 0;
    while heap.pop().is_some() {
        drained += 1;
    }
    assert_eq!(drained, 4);
}

#[test]
fn test_clear_then_reuse() {
    let mut heap: HeapPq<i32> = (0..10).collect();
    heap.clear();
    assert!(heap.is_empty());

    heap.push(42);
    assert_eq!(heap.peek(), Some(42));

    let mut linked = LinkedQueue::new();
    linked.push_all([1, 2]);
    linked.clear();
    linked.push(3);
    assert_eq!(linked.pop(), Some(3));
}

#[test]
fn test_huge_capacity_is_clamped() {
    let queue: BlockingQueue<u8> = BlockingQueue::new(usize::MAX);
    assert!(queue.capacity() < usize::MAX);
    assert_eq!(queue.available_permits(), queue.capacity());
}

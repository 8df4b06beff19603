//! Cross-module integration tests
//!
//! Exercises the public API the way a downstream crate would: containers
//! behind the thread-safe wrapper, the blocking queue shared through `Arc`,
//! and the command runners the binary dispatches to.

use containerkit::app::cli::args::ContainerKind;
use containerkit::app::commands::backpressure::{self, BackpressureSettings};
use containerkit::app::commands::{heap_sort, stress};
use containerkit::compare::OppositeNatural;
use containerkit::containers::api::*;
use containerkit::list::ArrayList;
use containerkit::map::HashMap;
use containerkit::queue::{BlockingQueue, HeapPq, HeapPqBuilder, LinkedQueue, PushContext};
use containerkit::sync::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use strum::IntoEnumIterator;

#[test]
fn test_wrapped_heap_yields_priority_order_after_concurrent_pushes() {
    let heap = make_thread_safe(HeapPqBuilder::<i64, _>::new(OppositeNatural::default()).build());

    let producers: Vec<_> = (0..4)
        .map(|worker: i64| {
            let heap = heap.clone();
            thread::spawn(move || {
                for value in 0..100 {
                    heap.push(value * 4 + worker);
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    let drained: Vec<i64> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, (0..400).collect::<Vec<_>>());
}

#[test]
fn test_wrapped_queue_preserves_per_producer_order() {
    let queue = make_thread_safe(LinkedQueue::<(usize, usize)>::new());

    let producers: Vec<_> = (0..3)
        .map(|worker: usize| {
            let queue = queue.clone();
            thread::spawn(move || {
                for sequence in 0..200 {
                    queue.push((worker, sequence));
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    let mut last_seen = [None::<usize>; 3];
    while let Some((worker, sequence)) = queue.pop() {
        if let Some(previous) = last_seen[worker] {
            assert!(sequence > previous, "FIFO order broken for producer {}", worker);
        }
        last_seen[worker] = Some(sequence);
    }
    assert_eq!(last_seen, [Some(199); 3]);
}

#[test]
fn test_wrapped_map_and_list_share_state_across_clones() {
    let map = make_thread_safe(HashMap::<u32, u32>::new());
    let list = make_thread_safe(ArrayList::<u32>::new());

    let writers: Vec<_> = (0..4)
        .map(|worker: u32| {
            let map = map.clone();
            let list = list.clone();
            thread::spawn(move || {
                map.put(worker, worker * 10);
                list.append(worker);
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&2), Some(20));
    assert!(map.contains_all_keys(&[0, 1, 2, 3]));

    let mut appended: Vec<u32> = list.iterator().map(|(_, value)| value).collect();
    appended.sort_unstable();
    assert_eq!(appended, vec![0, 1, 2, 3]);
}

#[test]
fn test_make_thread_safe_is_idempotent() {
    let once = make_thread_safe(HeapPq::<u8>::new());
    let twice = make_thread_safe(once.clone());

    assert!(twice.ptr_eq(&once));
    assert!(once.is_synchronized());
    assert!(!HeapPq::<u8>::new().is_synchronized());
}

#[test]
fn test_blocking_queue_shared_through_arc() {
    let queue = Arc::new(BlockingQueue::<i32>::new(2));

    let producer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            for value in 0..50 {
                queue.push(value);
            }
        })
    };

    let mut received = Vec::new();
    while received.len() < 50 {
        assert!(queue.len() <= 2);
        match queue.pop() {
            Some(value) => received.push(value),
            None => thread::sleep(Duration::from_micros(50)),
        }
    }
    producer.join().unwrap();

    assert_eq!(received, (0..50).collect::<Vec<_>>());
    assert_eq!(queue.available_permits(), 2);
}

#[tokio::test]
async fn test_push_with_context_times_out_on_full_queue() {
    let queue = BlockingQueue::new(1);
    queue.try_push("first").unwrap();

    let ctx = PushContext::with_timeout(Duration::from_millis(30));
    let error = queue.push_with_context(&ctx, "second").await.unwrap_err();

    assert!(matches!(error, ContainerError::DeadlineExceeded { .. }));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.peek(), Some("first"));
}

#[test]
fn test_stress_runner_passes_for_every_kind() {
    let signal = CancelSignal::never();

    for kind in ContainerKind::iter() {
        let report = stress::run(kind, 3, 100, &signal);
        assert!(report.passed, "{} stress run failed: {:?}", kind, report);
        assert_eq!(report.pushed, 300);
        assert_eq!(report.popped, 300);
        assert_eq!(report.final_size, 0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_backpressure_runner_respects_capacity() {
    let settings = BackpressureSettings {
        capacity: 3,
        items: 200,
        timeout: None,
        consumer_delay: Duration::from_micros(20),
    };

    let report = backpressure::run(settings, &CancelSignal::never()).await;

    assert!(report.passed, "{:?}", report);
    assert!(report.max_observed <= 3);
    assert_eq!(report.consumed, 200);
}

#[test]
fn test_heap_sort_runner() {
    assert_eq!(
        heap_sort::run(&[100, 1145, -202, 5, 6, 7], false),
        vec![1145, 100, 7, 6, 5, -202]
    );
    assert_eq!(
        heap_sort::run(&[100, 1145, -202, 5, 6, 7], true),
        vec![-202, 5, 6, 7, 100, 1145]
    );
}

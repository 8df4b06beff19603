//! Many-thread push/pop stress run over a thread-safe container
//!
//! ```text
//!   phase 1: N pushers ──push(unique values)──► ThreadSafe<C>
//!   phase 2: N poppers ◄──pop()───────────────── ThreadSafe<C>
//!   verify:  every value popped exactly once, final size 0
//! ```

use super::report::StressReport;
use crate::app::cli::args::ContainerKind;
use crate::containers::api::*;
use crate::list::ArrayList;
use crate::queue::{HeapPq, LinkedQueue};
use crate::set::HashSet;
use crate::stack::ArrayStack;
use crate::sync::*;
use std::collections::HashSet as SeenSet;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;

/// Push and pop operations bound to one shared container
struct Workload {
    push: Arc<dyn Fn(usize) + Send + Sync>,
    pop: Arc<dyn Fn() -> Option<usize> + Send + Sync>,
    len: Box<dyn Fn() -> usize>,
}

impl Workload {
    fn for_kind(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Queue => {
                let queue = make_thread_safe(LinkedQueue::<usize>::new());
                let (pusher, popper) = (queue.clone(), queue.clone());
                Self {
                    push: Arc::new(move |value: usize| pusher.push(value)),
                    pop: Arc::new(move || popper.pop()),
                    len: Box::new(move || queue.len()),
                }
            }
            ContainerKind::Stack => {
                let stack = make_thread_safe(ArrayStack::<usize>::new());
                let (pusher, popper) = (stack.clone(), stack.clone());
                Self {
                    push: Arc::new(move |value: usize| pusher.push(value)),
                    pop: Arc::new(move || popper.pop()),
                    len: Box::new(move || stack.len()),
                }
            }
            ContainerKind::List => {
                let list = make_thread_safe(ArrayList::<usize>::new());
                let (pusher, popper) = (list.clone(), list.clone());
                Self {
                    push: Arc::new(move |value: usize| pusher.append(value)),
                    pop: Arc::new(move || popper.pop_back()),
                    len: Box::new(move || list.len()),
                }
            }
            ContainerKind::Set => {
                let set = make_thread_safe(HashSet::<usize>::new());
                let (pusher, popper) = (set.clone(), set.clone());
                Self {
                    push: Arc::new(move |value: usize| {
                        pusher.add(value);
                    }),
                    // Sets have no pop; take any element under one write lock
                    pop: Arc::new(move || {
                        popper.write(|set| {
                            let taken = set.entries().next().map(|(value, _)| value)?;
                            set.remove(&taken);
                            Some(taken)
                        })
                    }),
                    len: Box::new(move || set.len()),
                }
            }
            ContainerKind::Heap => {
                let heap = make_thread_safe(HeapPq::<usize>::new());
                let (pusher, popper) = (heap.clone(), heap.clone());
                Self {
                    push: Arc::new(move |value: usize| pusher.push(value)),
                    pop: Arc::new(move || popper.pop()),
                    len: Box::new(move || heap.len()),
                }
            }
        }
    }
}

/// Run one stress pass; stops early once `signal` fires
pub fn run(
    kind: ContainerKind,
    threads: usize,
    items_per_thread: usize,
    signal: &CancelSignal,
) -> StressReport {
    log::info!(
        "stress {}: {} threads x {} values",
        kind,
        threads,
        items_per_thread
    );
    let workload = Workload::for_kind(kind);
    let start = Arc::new(Barrier::new(threads));

    let push_started = Instant::now();
    let pushers: Vec<_> = (0..threads)
        .map(|worker| {
            let push = Arc::clone(&workload.push);
            let start = Arc::clone(&start);
            let signal = signal.clone();
            thread::spawn(move || {
                start.wait();
                let mut pushed = 0;
                for offset in 0..items_per_thread {
                    if signal.is_cancelled() {
                        break;
                    }
                    push(worker * items_per_thread + offset);
                    pushed += 1;
                }
                pushed
            })
        })
        .collect();
    let pushed = join_all(pushers).into_iter().sum::<usize>();
    let push_ms = push_started.elapsed().as_millis() as u64;
    log::debug!("stress {}: {} values pushed in {} ms", kind, pushed, push_ms);

    let pop_started = Instant::now();
    let poppers: Vec<_> = (0..threads)
        .map(|_| {
            let pop = Arc::clone(&workload.pop);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                let mut popped = Vec::with_capacity(items_per_thread);
                while let Some(value) = pop() {
                    popped.push(value);
                }
                popped
            })
        })
        .collect();
    let popped: Vec<usize> = join_all(poppers).into_iter().flatten().collect();
    let pop_ms = pop_started.elapsed().as_millis() as u64;

    let mut seen = SeenSet::with_capacity(popped.len());
    let duplicates = popped.iter().filter(|value| !seen.insert(**value)).count();
    let missing = pushed.saturating_sub(seen.len());
    let final_size = (workload.len)();

    let mut report = StressReport {
        container: kind.to_string(),
        threads,
        items_per_thread,
        pushed,
        popped: popped.len(),
        duplicates,
        missing,
        final_size,
        push_ms,
        pop_ms,
        cancelled: signal.is_cancelled(),
        passed: false,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };
    if !report.verify() {
        log::warn!("stress {} failed verification: {:?}", kind, report);
    }
    report
}

// A worker that panicked contributes nothing; the report then fails verification
fn join_all<T: Default>(handles: Vec<thread::JoinHandle<T>>) -> Vec<T> {
    handles
        .into_iter()
        .map(|handle| {
            handle.join().unwrap_or_else(|_| {
                log::error!("stress worker thread panicked");
                T::default()
            })
        })
        .collect()
}

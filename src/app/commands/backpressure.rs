//! Single producer, single consumer over a bounded blocking queue
//!
//! The producer pushes through `push_with_context`, so a Ctrl-C or a
//! per-push timeout abandons the wait instead of hanging. Both sides run
//! as futures on the current task.

use super::report::BackpressureReport;
use crate::containers::api::{CancelSignal, ContainerError};
use crate::queue::{BlockingQueue, PushContext};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackpressureSettings {
    pub capacity: usize,
    pub items: usize,
    pub timeout: Option<Duration>,
    pub consumer_delay: Duration,
}

#[derive(Debug, Default)]
struct ProducerTally {
    produced: usize,
    abandoned: usize,
    cancelled: bool,
}

pub async fn run(settings: BackpressureSettings, signal: &CancelSignal) -> BackpressureReport {
    log::info!(
        "backpressure: {} items through a queue of capacity {}",
        settings.items,
        settings.capacity
    );
    let queue = BlockingQueue::new(settings.capacity);
    let max_observed = AtomicUsize::new(0);
    let producer_done = AtomicBool::new(false);
    let started = Instant::now();

    let producer = async {
        let mut tally = ProducerTally::default();
        for value in 0..settings.items {
            let mut ctx = PushContext::with_cancel(signal.clone());
            if let Some(timeout) = settings.timeout {
                ctx = ctx.and_timeout(timeout);
            }
            match queue.push_with_context(&ctx, value).await {
                Ok(()) => {
                    tally.produced += 1;
                    max_observed.fetch_max(queue.len(), Ordering::Relaxed);
                }
                Err(ContainerError::Cancelled) => {
                    tally.cancelled = true;
                    break;
                }
                Err(e) => {
                    log::warn!("push of item {} abandoned: {}", value, e);
                    tally.abandoned += 1;
                }
            }
        }
        producer_done.store(true, Ordering::Release);
        tally
    };

    let consumer = async {
        let mut consumed = 0;
        loop {
            let stored = queue.len();
            max_observed.fetch_max(stored, Ordering::Relaxed);
            match queue.pop() {
                Some(_) => {
                    consumed += 1;
                    if settings.consumer_delay.is_zero() {
                        tokio::task::yield_now().await;
                    } else {
                        tokio::time::sleep(settings.consumer_delay).await;
                    }
                }
                None if producer_done.load(Ordering::Acquire) && queue.is_empty() => break,
                None => tokio::time::sleep(Duration::from_millis(1)).await,
            }
        }
        consumed
    };

    let (tally, consumed) = tokio::join!(producer, consumer);

    let mut report = BackpressureReport {
        capacity: queue.capacity(),
        items: settings.items,
        produced: tally.produced,
        consumed,
        abandoned: tally.abandoned,
        max_observed: max_observed.load(Ordering::Relaxed),
        elapsed_ms: started.elapsed().as_millis() as u64,
        cancelled: tally.cancelled,
        passed: false,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };
    if !report.verify() {
        log::warn!("backpressure failed verification: {:?}", report);
    }
    report
}

//! Cooperative cancellation
//!
//! A [`Canceller`] owns the trigger; any number of [`CancelSignal`] clones
//! observe it. Signals can be polled (`is_cancelled`) from synchronous code,
//! such as the lazy key/value sequences, or awaited (`cancelled`) from async
//! code, such as a blocking-queue push waiting for a permit.
//!
//! ```text
//!   Canceller ──trigger()──► AtomicBool (Release) ──► is_cancelled() (Acquire)
//!        │
//!        └──────────────────► broadcast::Sender ────► cancelled().await
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Owner side of a cancellation signal
#[derive(Debug)]
pub struct Canceller {
    tx: broadcast::Sender<()>,
    cancelled: Arc<AtomicBool>,
}

impl Canceller {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(8);
        Self {
            tx,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A new observer of this canceller
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            tx: Some(self.tx.clone()),
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Fire the signal. Triggering more than once has no further effect.
    pub fn trigger(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            log::debug!("cancellation triggered");
            let _ = self.tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Trigger this canceller on the first Ctrl-C
    ///
    /// A second Ctrl-C exits the process with status 130. Must be called
    /// from within a tokio runtime.
    pub fn on_ctrl_c(&self) {
        let tx = self.tx.clone();
        let cancelled = Arc::clone(&self.cancelled);

        tokio::spawn(async move {
            let mut interrupts = 0usize;
            while tokio::signal::ctrl_c().await.is_ok() {
                interrupts += 1;
                if interrupts > 1 {
                    log::warn!("Ctrl-C received again; exiting");
                    std::process::exit(130);
                }
                log::warn!("Ctrl-C received; cancelling pending work");
                cancelled.store(true, Ordering::Release);
                let _ = tx.send(());
            }
        });
    }
}

impl Default for Canceller {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a cancellation signal
#[derive(Debug, Clone)]
pub struct CancelSignal {
    tx: Option<broadcast::Sender<()>>,
    cancelled: Arc<AtomicBool>,
}

impl CancelSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        Self {
            tx: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Resolve once the owning canceller has been triggered
    pub async fn cancelled(&self) {
        let Some(tx) = &self.tx else {
            return std::future::pending().await;
        };

        // Subscribe before checking the flag so a trigger in between is not lost
        let mut rx = tx.subscribe();
        if self.is_cancelled() {
            return;
        }

        loop {
            match rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => return,
                Err(broadcast::error::RecvError::Closed) => {
                    if self.is_cancelled() {
                        return;
                    }
                    std::future::pending::<()>().await;
                }
            }
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::never()
    }
}

//! Push contexts: cancellation and deadlines for a blocked producer

use crate::containers::api::ContainerError;
use crate::core::cancel::CancelSignal;
use std::time::Duration;
use tokio::time::Instant;

/// Bounds how long [`BlockingQueue::push_with_context`] may wait
///
/// A context fires when its cancel signal is triggered or its deadline
/// passes, whichever comes first. The background context never fires.
///
/// ```
/// use containerkit::core::cancel::Canceller;
/// use containerkit::queue::PushContext;
/// use std::time::Duration;
///
/// let canceller = Canceller::new();
/// let ctx = PushContext::with_timeout(Duration::from_millis(250))
///     .and_cancel(canceller.signal());
/// assert!(ctx.err().is_none());
/// ```
///
/// [`BlockingQueue::push_with_context`]: super::BlockingQueue::push_with_context
#[derive(Debug, Clone)]
pub struct PushContext {
    started: Instant,
    deadline: Option<Instant>,
    cancel: Option<CancelSignal>,
}

impl PushContext {
    pub fn background() -> Self {
        Self {
            started: Instant::now(),
            deadline: None,
            cancel: None,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().and_timeout(timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self::background().and_deadline(deadline)
    }

    pub fn with_cancel(signal: CancelSignal) -> Self {
        Self::background().and_cancel(signal)
    }

    pub fn and_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.and_deadline(deadline)
    }

    /// Keep the earlier of the existing and the new deadline
    pub fn and_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn and_cancel(mut self, signal: CancelSignal) -> Self {
        self.cancel = Some(signal);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The failure this context reports if it has already fired
    pub fn err(&self) -> Option<ContainerError> {
        if self.cancel.as_ref().is_some_and(CancelSignal::is_cancelled) {
            return Some(ContainerError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(self.deadline_error()),
            _ => None,
        }
    }

    /// Resolve with the failure once the context fires
    pub async fn done(&self) -> ContainerError {
        match (&self.cancel, self.deadline) {
            (Some(signal), Some(deadline)) => {
                tokio::select! {
                    _ = signal.cancelled() => ContainerError::Cancelled,
                    _ = tokio::time::sleep_until(deadline) => self.deadline_error(),
                }
            }
            (Some(signal), None) => {
                signal.cancelled().await;
                ContainerError::Cancelled
            }
            (None, Some(deadline)) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline_error()
            }
            (None, None) => std::future::pending().await,
        }
    }

    fn deadline_error(&self) -> ContainerError {
        ContainerError::DeadlineExceeded {
            waited_ms: self.started.elapsed().as_millis() as u64,
        }
    }
}

impl Default for PushContext {
    fn default() -> Self {
        Self::background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cancel::Canceller;

    #[test]
    fn test_background_context_never_fires() {
        assert!(PushContext::background().err().is_none());
        assert!(PushContext::default().deadline().is_none());
    }

    #[test]
    fn test_earlier_deadline_wins() {
        let now = Instant::now();
        let ctx = PushContext::with_deadline(now + Duration::from_secs(10))
            .and_deadline(now + Duration::from_secs(1))
            .and_deadline(now + Duration::from_secs(5));

        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(1)));
    }

    #[test]
    fn test_err_reports_cancel_before_deadline() {
        let canceller = Canceller::new();
        let ctx = PushContext::with_timeout(Duration::ZERO).and_cancel(canceller.signal());

        assert!(matches!(
            ctx.err(),
            Some(ContainerError::DeadlineExceeded { .. })
        ));

        canceller.trigger();
        assert!(matches!(ctx.err(), Some(ContainerError::Cancelled)));
    }

    #[tokio::test]
    async fn test_done_resolves_at_deadline() {
        let ctx = PushContext::with_timeout(Duration::from_millis(20));
        let error = ctx.done().await;

        match error {
            ContainerError::DeadlineExceeded { waited_ms } => assert!(waited_ms >= 20),
            other => panic!("Expected DeadlineExceeded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_done_resolves_on_cancel() {
        let canceller = Canceller::new();
        let ctx = PushContext::with_cancel(canceller.signal());

        let waiter = tokio::spawn(async move { ctx.done().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.trigger();

        let error = waiter.await.expect("waiter task should not panic");
        assert!(matches!(error, ContainerError::Cancelled));
    }
}

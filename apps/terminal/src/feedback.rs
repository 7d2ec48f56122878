//! Deferred callback for the pause after a quiz answer.

use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("a feedback callback is already pending")]
    AlreadyPending,
}

/// At most one pending "feedback elapsed" notification.
///
/// The notification arrives on the channel given to `new`. Call `fired` once it
/// has been received. Dropping the timer cancels anything still pending.
#[derive(Debug)]
pub struct FeedbackTimer {
    tx: mpsc::Sender<()>,
    pending: Option<JoinHandle<()>>,
}

impl FeedbackTimer {
    pub fn new(tx: mpsc::Sender<()>) -> Self {
        Self { tx, pending: None }
    }

    /// Send a notification after `delay`.
    pub fn schedule(&mut self, delay: Duration) -> Result<(), FeedbackError> {
        if self.pending.is_some() {
            return Err(FeedbackError::AlreadyPending);
        }
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means the session was torn down
            let _ = tx.send(()).await;
        }));
        tracing::debug!(delay_ms = delay.as_millis() as u64, "feedback scheduled");
        Ok(())
    }

    /// Acknowledge a received notification.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Abort the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!("feedback cancelled");
        }
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut timer = FeedbackTimer::new(tx);
        let start = tokio::time::Instant::now();

        timer.schedule(Duration::from_millis(1000)).unwrap();
        assert!(timer.is_pending());
        rx.recv().await.unwrap();
        timer.fired();

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn second_schedule_is_refused() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut timer = FeedbackTimer::new(tx);

        timer.schedule(Duration::from_millis(1000)).unwrap();
        assert_eq!(
            timer.schedule(Duration::from_millis(10)),
            Err(FeedbackError::AlreadyPending)
        );

        rx.recv().await.unwrap();
        timer.fired();
        assert_eq!(timer.schedule(Duration::from_millis(10)), Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_callback_never_fires() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut timer = FeedbackTimer::new(tx);

        timer.schedule(Duration::from_millis(1000)).unwrap();
        timer.cancel();
        assert!(!timer.is_pending());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut timer = FeedbackTimer::new(tx);
        timer.schedule(Duration::from_millis(1000)).unwrap();
        drop(timer);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        // all senders gone and nothing was sent
        assert_eq!(rx.recv().await, None);
    }
}

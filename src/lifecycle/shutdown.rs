//! Cancellation coordination.

use std::future::Future;

use tokio::sync::broadcast;

/// Coordinator for cancellation and graceful shutdown.
///
/// Provides a broadcast channel that the startup fetch and the server can
/// both wait on.
#[derive(Debug, Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Future resolving once [`trigger`](Shutdown::trigger) is called or every
    /// coordinator handle is dropped.
    ///
    /// The subscription is taken when this is called, not when first polled.
    pub fn cancelled(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_resolves_cancelled() {
        let shutdown = Shutdown::new();
        let cancelled = shutdown.cancelled();
        assert_eq!(shutdown.receiver_count(), 1);

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), cancelled)
            .await
            .expect("cancelled() should resolve after trigger");
    }

    #[tokio::test]
    async fn test_untriggered_stays_pending() {
        let shutdown = Shutdown::new();
        let result = tokio::time::timeout(Duration::from_millis(50), shutdown.cancelled()).await;
        assert!(result.is_err());
    }
}

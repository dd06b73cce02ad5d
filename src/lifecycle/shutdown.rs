//! Shutdown coordination for the relay.

use tokio::sync::broadcast;

/// Broadcast-based shutdown coordinator.
///
/// The signal task triggers it once; the server (and any test harness)
/// subscribes and drains in-flight requests before exiting. Subscribe
/// before triggering: a receiver created afterwards misses the signal.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

//! Shutdown coordination for the server.
//!
//! One [`Shutdown`] is owned by `main`; every long-running task holds a
//! [`ShutdownSignal`] and stops once it resolves.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
pub struct Shutdown {
    /// Fan-out to every subscribed task. Nothing is buffered past one signal.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a coordinator with no subscribers.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Hand out a signal for one task.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
            fired: false,
        }
    }

    /// Ask every subscribed task to stop.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still holding a signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// A task's view of the shutdown request.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
    fired: bool,
}

impl ShutdownSignal {
    /// Resolve once shutdown is triggered or the coordinator is dropped.
    ///
    /// Calling again after it resolved returns immediately.
    pub async fn recv(&mut self) {
        if self.fired {
            return;
        }
        // Lagged, closed and a delivered signal all mean stop.
        let _ = self.rx.recv().await;
        self.fired = true;
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

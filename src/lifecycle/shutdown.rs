//! Shutdown coordination.
//!
//! A single trigger stops the HTTP server from accepting on its TCP or Unix
//! socket and lets in-flight `/png` and `/html` renders finish before
//! `HttpServer::run` returns and the socket file is removed.

use tokio::sync::broadcast;

/// Fan-out of the stop signal to the server and any other listener.
///
/// Cloned into the signal handler task; each subscriber sees one `()`.
#[derive(Debug, Clone)]
pub struct Shutdown {
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

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of subscribers that have not yet been dropped.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

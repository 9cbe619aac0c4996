use std::sync::Arc;

use tokio::sync::Notify;

/// Broadcast stop for long-running loops.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    pub signal: Arc<Notify>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wakes every task currently parked in `wait_for_shutdown`.
    pub fn shutdown(&self) {
        self.signal.notify_waiters();
    }

    pub async fn wait_for_shutdown(&self) {
        self.signal.notified().await;
    }
}

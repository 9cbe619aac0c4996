use std::time::Duration;

use tokio::sync::watch;

/// Test helpers for common operations
pub struct TestHelpers;

impl TestHelpers {
    /// Wait until the watched value satisfies `predicate`, or give up after `timeout`.
    pub async fn wait_for_state<T, F>(
        receiver: &mut watch::Receiver<T>,
        timeout: Duration,
        predicate: F,
    ) -> Option<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        tokio::time::timeout(timeout, receiver.wait_for(predicate))
            .await
            .ok()?
            .ok()
            .map(|state| state.clone())
    }
}

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::info;

use crate::state::AppState;

/// One-shot delayed `trigger_urgent_demo`. The pending task is aborted when
/// the handle is dropped, so it never outlives the session that spawned it.
pub struct AutoTrigger {
    handle: JoinHandle<()>,
}

impl AutoTrigger {
    pub fn spawn(state: Arc<AppState>, delay: Duration) -> Self {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            state
                .execute("trigger_urgent_demo", |store| {
                    store.trigger_urgent_demo();
                    true
                })
                .await;
            info!(delay_ms = delay.as_millis() as u64, "urgent demo auto-triggered");
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for AutoTrigger {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

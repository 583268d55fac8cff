use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::StoreSnapshot;

/// Pushed to WebSocket subscribers after a command changes the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEvent {
    pub command: &'static str,
    pub at: DateTime<Utc>,
    pub state: StoreSnapshot,
}

impl StoreEvent {
    pub fn new(command: &'static str, state: StoreSnapshot) -> Self {
        Self {
            command,
            at: Utc::now(),
            state,
        }
    }
}

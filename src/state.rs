use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::auth::UserRepository;
use crate::observability::metrics::Metrics;
use crate::seed::SeedSource;
use crate::store::{OrderLifecycleStore, StoreEvent, StoreSnapshot};

/// Everything a request handler or background task needs. Built once per
/// process in `main` and shared as `Arc<AppState>`.
pub struct AppState {
    pub store: RwLock<OrderLifecycleStore>,
    pub users: UserRepository,
    pub store_events_tx: broadcast::Sender<StoreEvent>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(seed: &dyn SeedSource, event_buffer_size: usize) -> Self {
        let (store_events_tx, _unused_rx) = broadcast::channel(event_buffer_size.max(1));
        let store = OrderLifecycleStore::new(seed);
        let metrics = Metrics::new();
        metrics.unread_notifications.set(store.unread_count() as i64);

        Self {
            store: RwLock::new(store),
            users: UserRepository::new(),
            store_events_tx,
            metrics,
        }
    }

    /// Runs one store command and publishes the resulting state. Publishing
    /// happens under the write lock so events go out in command order.
    pub async fn execute<F>(&self, command: &'static str, f: F) -> (bool, StoreSnapshot)
    where
        F: FnOnce(&mut OrderLifecycleStore) -> bool,
    {
        let mut store = self.store.write().await;
        let applied = f(&mut *store);
        let snapshot = store.snapshot();

        self.metrics
            .unread_notifications
            .set(snapshot.unread_count as i64);

        if applied {
            // no subscribers is fine
            let _ = self
                .store_events_tx
                .send(StoreEvent::new(command, snapshot.clone()));
        }
        drop(store);

        self.metrics.record_command(command, applied);
        debug!(command, applied, "store command executed");
        (applied, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::AppState;
    use crate::seed::FixedSeed;

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn last_event_matches_store_under_concurrent_commands() {
        for _ in 0..100 {
            let state = Arc::new(AppState::new(&FixedSeed, 256));
            let mut events = state.store_events_tx.subscribe();

            let tasks: Vec<_> = (0..64)
                .map(|i| {
                    let state = state.clone();
                    tokio::spawn(async move {
                        state
                            .execute("set_fuel_requested", |store| {
                                store.set_fuel_requested(i % 2 == 0);
                                true
                            })
                            .await;
                    })
                })
                .collect();
            for task in tasks {
                task.await.unwrap();
            }

            let mut last = None;
            while let Ok(event) = events.try_recv() {
                last = Some(event);
            }
            let last = last.unwrap();

            let store = state.store.read().await;
            assert_eq!(last.state.driver.fuel_requested, store.fuel_requested());
            assert_eq!(
                state.metrics.unread_notifications.get(),
                store.unread_count() as i64
            );
        }
    }

    #[test]
    fn zero_event_buffer_does_not_panic() {
        let state = AppState::new(&FixedSeed, 0);
        assert_eq!(state.store_events_tx.receiver_count(), 0);
    }
}

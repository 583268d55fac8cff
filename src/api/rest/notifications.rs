use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::Json;
use axum::Router;
use serde::Serialize;

use crate::models::notification::Notification;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notifications", get(list_notifications))
        .route("/api/notifications/:id", delete(dismiss_notification))
        .route(
            "/api/notifications/:id/acknowledge",
            post(acknowledge_notification),
        )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCommandResponse {
    pub applied: bool,
    pub unread_count: usize,
}

async fn list_notifications(State(state): State<Arc<AppState>>) -> Json<NotificationFeed> {
    let store = state.store.read().await;
    Json(NotificationFeed {
        notifications: store.notifications().to_vec(),
        unread_count: store.unread_count(),
    })
}

async fn dismiss_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<NotificationCommandResponse> {
    let (applied, snapshot) = state
        .execute("dismiss_notification", |store| store.dismiss_notification(&id))
        .await;

    Json(NotificationCommandResponse {
        applied,
        unread_count: snapshot.unread_count,
    })
}

async fn acknowledge_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<NotificationCommandResponse> {
    let (applied, snapshot) = state
        .execute("acknowledge_notification", |store| {
            store.acknowledge_notification(&id)
        })
        .await;

    Json(NotificationCommandResponse {
        applied,
        unread_count: snapshot.unread_count,
    })
}

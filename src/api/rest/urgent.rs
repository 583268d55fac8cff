use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::Serialize;
use tracing::info;

use crate::state::AppState;
use crate::store::snapshot::UrgentView;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/urgent", get(get_urgent))
        .route("/api/urgent/trigger", post(trigger))
        .route("/api/urgent/overlay/show", post(show_overlay))
        .route("/api/urgent/overlay/dismiss", post(dismiss_overlay))
        .route("/api/urgent/acknowledge", post(acknowledge))
}

#[derive(Serialize)]
pub struct UrgentCommandResponse {
    pub applied: bool,
    pub urgent: UrgentView,
}

async fn get_urgent(State(state): State<Arc<AppState>>) -> Json<UrgentView> {
    Json(state.store.read().await.urgent_view())
}

async fn trigger(State(state): State<Arc<AppState>>) -> Json<UrgentCommandResponse> {
    let (applied, snapshot) = state
        .execute("trigger_urgent_demo", |store| {
            store.trigger_urgent_demo();
            true
        })
        .await;

    Json(UrgentCommandResponse {
        applied,
        urgent: snapshot.urgent,
    })
}

async fn show_overlay(State(state): State<Arc<AppState>>) -> Json<UrgentCommandResponse> {
    let (applied, snapshot) = state
        .execute("show_urgent_overlay", |store| store.show_urgent_overlay())
        .await;

    Json(UrgentCommandResponse {
        applied,
        urgent: snapshot.urgent,
    })
}

async fn dismiss_overlay(State(state): State<Arc<AppState>>) -> Json<UrgentCommandResponse> {
    let (applied, snapshot) = state
        .execute("dismiss_urgent_overlay", |store| {
            store.dismiss_urgent_overlay();
            true
        })
        .await;

    Json(UrgentCommandResponse {
        applied,
        urgent: snapshot.urgent,
    })
}

/// `applied` reports whether a proposal was pending; the route only changes
/// the first time a given urgent order is acknowledged.
async fn acknowledge(State(state): State<Arc<AppState>>) -> Json<UrgentCommandResponse> {
    let (applied, snapshot) = state
        .execute("acknowledge_urgent_order", |store| {
            let armed = store.urgent_order().is_some();
            if store.acknowledge_urgent_order() {
                info!(orders = store.orders().len(), "urgent order inserted into route");
            }
            armed
        })
        .await;

    Json(UrgentCommandResponse {
        applied,
        urgent: snapshot.urgent,
    })
}

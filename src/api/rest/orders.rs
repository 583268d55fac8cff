use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::models::order::{Order, OrderPartition, OrderStatus};
use crate::state::AppState;
use crate::store::StoreSnapshot;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/partition", get(partition_orders))
        .route("/api/orders/:id", get(get_order))
        .route("/api/orders/:id/advance", post(advance_order))
}

#[derive(Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<OrderStatus>,
}

#[derive(Deserialize)]
pub struct AdvanceOrderRequest {
    pub status: OrderStatus,
}

#[derive(Serialize)]
pub struct AdvanceOrderResponse {
    pub applied: bool,
    pub order: Order,
}

async fn get_state(State(state): State<Arc<AppState>>) -> Json<StoreSnapshot> {
    Json(state.store.read().await.snapshot())
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListOrdersQuery>,
) -> Json<Vec<Order>> {
    let store = state.store.read().await;
    let orders = match query.status {
        Some(status) => store.orders_with_status(status),
        None => store.orders().to_vec(),
    };
    Json(orders)
}

async fn partition_orders(State(state): State<Arc<AppState>>) -> Json<OrderPartition> {
    Json(state.store.read().await.partition())
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let store = state.store.read().await;
    let order = store
        .order(&id)
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

    Ok(Json(order.clone()))
}

async fn advance_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<AdvanceOrderRequest>,
) -> Result<Json<AdvanceOrderResponse>, AppError> {
    let (applied, snapshot) = state
        .execute("advance_order", |store| store.advance_order(&id, payload.status))
        .await;

    let order = snapshot
        .orders
        .into_iter()
        .find(|o| o.id == id)
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

    if applied {
        info!(order_id = %id, status = ?order.status, "order advanced");
    }

    Ok(Json(AdvanceOrderResponse { applied, order }))
}

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post, put};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::models::order::GeoPoint;
use crate::models::reference::{NearestPlace, ReferenceData};
use crate::state::AppState;
use crate::store::snapshot::DriverToggles;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/driver", get(get_toggles))
        .route("/api/driver/fuel-requested", put(set_fuel_requested))
        .route("/api/driver/break-requested", put(set_break_requested))
        .route("/api/driver/fuel-stop", post(request_fuel_stop))
        .route(
            "/api/driver/nearest-fuel-station",
            get(nearest_fuel_station),
        )
        .route("/api/reference", get(reference_data))
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub value: bool,
}

async fn get_toggles(State(state): State<Arc<AppState>>) -> Json<DriverToggles> {
    Json(state.store.read().await.driver_toggles())
}

async fn set_fuel_requested(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ToggleRequest>,
) -> Json<DriverToggles> {
    let (_, snapshot) = state
        .execute("set_fuel_requested", |store| {
            store.set_fuel_requested(payload.value);
            true
        })
        .await;
    Json(snapshot.driver)
}

async fn set_break_requested(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ToggleRequest>,
) -> Json<DriverToggles> {
    let (_, snapshot) = state
        .execute("set_break_requested", |store| {
            store.set_break_requested(payload.value);
            true
        })
        .await;
    Json(snapshot.driver)
}

async fn request_fuel_stop(State(state): State<Arc<AppState>>) -> Json<DriverToggles> {
    let (_, snapshot) = state
        .execute("request_fuel_stop", |store| {
            store.request_fuel_stop();
            true
        })
        .await;
    info!("fuel stop requested");
    Json(snapshot.driver)
}

async fn nearest_fuel_station(
    State(state): State<Arc<AppState>>,
    Query(from): Query<GeoPoint>,
) -> Result<Json<NearestPlace>, AppError> {
    if !(-90.0..=90.0).contains(&from.lat) || !(-180.0..=180.0).contains(&from.lng) {
        return Err(AppError::BadRequest(
            "lat must be within [-90, 90] and lng within [-180, 180]".to_string(),
        ));
    }

    let nearest = state
        .store
        .read()
        .await
        .nearest_fuel_station(&from)
        .ok_or_else(|| AppError::NotFound("no fuel stations configured".to_string()))?;

    Ok(Json(nearest))
}

async fn reference_data(State(state): State<Arc<AppState>>) -> Json<ReferenceData> {
    Json(state.store.read().await.reference_data().clone())
}

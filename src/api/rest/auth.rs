use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::NewUser;
use crate::error::AppError;
use crate::models::user::{ProfileUpdate, User};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/user/:id", get(get_user).put(update_user))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub employee_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub vehicle_no: Option<String>,
    pub vehicle_type: Option<String>,
    pub fuel_type: Option<String>,
    pub capacity: Option<String>,
    pub phone_no: Option<String>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

fn credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String), AppError> {
    match (username, password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            Ok((username, password))
        }
        _ => Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        )),
    }
}

fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("User not found".to_string()))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let (username, password) = credentials(payload.username, payload.password).inspect_err(|_| {
        state.metrics.record_auth("login", "bad_request");
    })?;

    let Some(user) = state.users.authenticate(&username, &password) else {
        state.metrics.record_auth("login", "unauthorized");
        warn!(username = %username, "login rejected");
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    };

    state.metrics.record_auth("login", "success");
    info!(user_id = %user.id, "driver logged in");
    Ok(Json(UserResponse { user }))
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let (username, password) = credentials(payload.username, payload.password).inspect_err(|_| {
        state.metrics.record_auth("signup", "bad_request");
    })?;

    let user = state
        .users
        .create(NewUser {
            username,
            password,
            name: payload.name,
            company_name: payload.company_name,
            employee_id: payload.employee_id,
        })
        .inspect_err(|_| state.metrics.record_auth("signup", "conflict"))?;

    state.metrics.record_auth("signup", "success");
    info!(user_id = %user.id, username = %user.username, "driver signed up");
    Ok(Json(UserResponse { user }))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&id)?;
    let user = state
        .users
        .get(&id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse { user }))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&id)?;
    let update = ProfileUpdate {
        name: payload.name,
        vehicle_no: payload.vehicle_no,
        vehicle_type: payload.vehicle_type,
        fuel_type: payload.fuel_type,
        capacity: payload.capacity,
        phone_no: payload.phone_no,
    };

    let user = state
        .users
        .update(&id, update)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    info!(user_id = %user.id, "driver profile updated");
    Ok(Json(UserResponse { user }))
}

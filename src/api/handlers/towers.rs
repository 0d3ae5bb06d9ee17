use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{NewTowerRequest, UpdateTowerRequest};
use crate::database;

use super::AppState;

pub async fn get_towers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::towers::list_towers(&mut conn) {
        Ok(towers) => Json(towers).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn add_tower(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewTowerRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Tower name is required").into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let inserted = database::towers::insert_tower(
        &mut conn,
        request.name.trim(),
        &request.buff,
        request.description.as_deref(),
        &request.members,
        &request.contest,
    );

    match inserted {
        Ok(tower) => Json(tower).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save Error: {}", e)).into_response(),
    }
}

pub async fn update_tower(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTowerRequest>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let updated = database::towers::update_tower(
        &mut conn,
        id,
        request.members.as_deref(),
        request.contest.as_ref(),
    );

    match updated {
        Ok(Some(tower)) => Json(tower).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("Tower {} not found", id)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save Error: {}", e)).into_response(),
    }
}

pub async fn delete_tower(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::towers::delete_tower(&mut conn, id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, format!("Tower {} not found", id)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Delete Error: {}", e)).into_response(),
    }
}

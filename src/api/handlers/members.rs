use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{MemberReadyRequest, NewMemberRequest};
use crate::database;

use super::AppState;

pub async fn get_members(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::members::list_members(&mut conn) {
        Ok(members) => Json(members).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewMemberRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Member name is required").into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::members::upsert_member(&mut conn, request.name.trim(), &request.class) {
        Ok((member, _)) => Json(member).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save Error: {}", e)).into_response(),
    }
}

pub async fn set_member_ready(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<MemberReadyRequest>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::members::set_member_ready(&mut conn, id, request.is_ready) {
        Ok(Some(member)) => Json(member).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("Member {} not found", id)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save Error: {}", e)).into_response(),
    }
}

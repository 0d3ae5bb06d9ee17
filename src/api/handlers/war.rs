use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::api::models::{
    AddPlayerRequest, CountdownResponse, ExportParams, MoveRequest, PendingExportResponse,
    PlayerAtRequest, SetWarTimeRequest,
};
use crate::countdown;
use crate::database::{self, DbConn};
use crate::domain::{reassignment, RosterError, RosterStore, ShadowWar, Snapshot};
use crate::export::{pending_players, PngRasterizer, RosterRasterizer};

use super::AppState;

pub async fn get_war(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match current_war(&mut conn, &state) {
        Ok(war) => Json(war).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

/// Full-tree save: the last-write-wins serialization point
pub async fn save_war(
    State(state): State<Arc<AppState>>,
    Json(war): Json<ShadowWar>,
) -> impl IntoResponse {
    let mut store = RosterStore::new(&state.config.war);
    let candidate = Snapshot {
        id: 0,
        created_at: Utc::now(),
        war,
    };
    if let Err(e) = store.load(&candidate) {
        return roster_rejection(e);
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    save_and_respond(&mut conn, store.current_state())
}

pub async fn move_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveRequest>,
) -> impl IntoResponse {
    apply_edit(&state, |war| {
        reassignment::move_player(war, request.from, request.from_index, request.to, request.to_index)
    })
}

pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddPlayerRequest>,
) -> impl IntoResponse {
    apply_edit(&state, |war| {
        reassignment::add_player(war, request.target, request.player.clone())
    })
}

pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlayerAtRequest>,
) -> impl IntoResponse {
    apply_edit(&state, |war| {
        reassignment::remove_player(war, request.target, request.index);
        Ok(())
    })
}

/// Each successful toggle is persisted immediately as its own snapshot
pub async fn toggle_ready(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlayerAtRequest>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let mut war = match current_war(&mut conn, &state) {
        Ok(war) => war,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    match reassignment::toggle_ready(&mut war, request.target, request.index) {
        Some(_) => save_and_respond(&mut conn, &war),
        // unresolvable slot: cancelled gesture, nothing to persist
        None => Json(war).into_response(),
    }
}

pub async fn set_war_time(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetWarTimeRequest>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let mut store = RosterStore::new(&state.config.war);
    match database::snapshots::latest_snapshot(&mut conn) {
        Ok(Some(snapshot)) => {
            if let Err(e) = store.load(&snapshot) {
                return roster_rejection(e);
            }
        }
        Ok(None) => {}
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }

    store.set_war_time(request.war_time);
    save_and_respond(&mut conn, store.current_state())
}

pub async fn get_countdown(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match current_war(&mut conn, &state) {
        Ok(war) => Json(CountdownResponse {
            display: countdown::remaining(Utc::now(), war.war_time),
        })
        .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::snapshots::snapshot_by_date(&mut conn, date) {
        Ok(Some(snapshot)) => Json(snapshot).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("No snapshot on {}", date)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

/// Re-save the snapshot of an earlier day as the new latest; history is
/// append-only, nothing is deleted
pub async fn rollback(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let snapshot = match database::snapshots::snapshot_by_date(&mut conn, date) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return (StatusCode::NOT_FOUND, format!("No snapshot on {}", date)).into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    save_and_respond(&mut conn, &snapshot.war)
}

pub async fn export_png(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let war = match current_war(&mut conn, &state) {
        Ok(war) => war,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let pending = pending_players(&war);
    if !pending.is_empty() && !params.force.unwrap_or(false) {
        return (
            StatusCode::CONFLICT,
            Json(PendingExportResponse {
                pending_players: pending,
            }),
        )
            .into_response();
    }

    let rasterizer = PngRasterizer::new(state.config.export.clone());
    match rasterizer.rasterize(&war) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Render Error: {}", e)).into_response(),
    }
}

/// Latest persisted tree, or the fixed empty layout when nothing is saved
fn current_war(conn: &mut DbConn, state: &AppState) -> anyhow::Result<ShadowWar> {
    let mut store = RosterStore::new(&state.config.war);
    if let Some(snapshot) = database::snapshots::latest_snapshot(conn)? {
        store.load(&snapshot)?;
    }
    Ok(store.current_state().clone())
}

fn apply_edit<F>(state: &AppState, edit: F) -> Response
where
    F: FnOnce(&mut ShadowWar) -> Result<(), RosterError>,
{
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let mut war = match current_war(&mut conn, state) {
        Ok(war) => war,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    if let Err(e) = edit(&mut war) {
        return roster_rejection(e);
    }

    save_and_respond(&mut conn, &war)
}

fn save_and_respond(conn: &mut DbConn, war: &ShadowWar) -> Response {
    match database::snapshots::insert_snapshot(conn, war) {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save Error: {}", e)).into_response(),
    }
}

fn roster_rejection(err: RosterError) -> Response {
    match &err {
        RosterError::Locked(_) | RosterError::DuplicatePlayer(_) => {
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
        RosterError::MalformedSnapshot(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
        RosterError::Persistence(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{members, towers, war, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/war", get(war::get_war).post(war::save_war))
        .route("/api/war/move", post(war::move_player))
        .route("/api/war/players", post(war::add_player).delete(war::remove_player))
        .route("/api/war/ready", post(war::toggle_ready))
        .route("/api/war/time", put(war::set_war_time))
        .route("/api/war/countdown", get(war::get_countdown))
        .route("/api/war/history/:date", get(war::get_history))
        .route("/api/war/rollback/:date", post(war::rollback))
        .route("/api/war/export.png", get(war::export_png))
        .route("/api/members", get(members::get_members).post(members::add_member))
        .route("/api/members/:id/ready", put(members::set_member_ready))
        .route("/api/towers", get(towers::get_towers).post(towers::add_tower))
        .route("/api/towers/:id", put(towers::update_tower).delete(towers::delete_tower))
        .with_state(state)
}

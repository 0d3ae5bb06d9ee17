use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ContestInfo, MatchRef, Player};

// --- Shadow war requests ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from: MatchRef,
    pub from_index: usize,
    pub to: MatchRef,
    pub to_index: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerRequest {
    pub target: MatchRef,
    pub player: Player,
}

/// Addresses one player slot; used by remove and ready-toggle
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAtRequest {
    pub target: MatchRef,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWarTimeRequest {
    pub war_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub force: Option<bool>,
}

// --- Shadow war responses ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownResponse {
    pub display: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingExportResponse {
    pub pending_players: Vec<String>,
}

// --- Members ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberRequest {
    pub name: String,
    pub class: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberReadyRequest {
    pub is_ready: bool,
}

// --- Towers ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTowerRequest {
    pub name: String,
    pub buff: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub contest: ContestInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTowerRequest {
    pub members: Option<Vec<String>>,
    pub contest: Option<ContestInfo>,
}

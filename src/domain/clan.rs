use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clan member as tracked on the roster page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub is_ready: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// Contestation state of a tower
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestInfo {
    pub is_contested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposing_clan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub war_date_time: Option<DateTime<Utc>>,
}

/// A tower held or contested by the clan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tower {
    pub id: i64,
    pub name: String,
    pub buff: String,
    pub description: Option<String>,
    pub members: Vec<String>,
    pub contest: ContestInfo,
    pub created_at: Option<NaiveDateTime>,
}

use chrono::{DateTime, Utc};

/// One row of the append-only snapshots table, payload still serialized
#[derive(Debug, Clone)]
pub struct SnapshotRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub payload: String,
}

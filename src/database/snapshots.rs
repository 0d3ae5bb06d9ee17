use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension};

use crate::domain::{RosterError, ShadowWar, Snapshot, SnapshotRepository};

use super::connection::{get_connection, DbConn, DbPool};
use super::models::SnapshotRecord;

pub fn insert_snapshot(conn: &mut DbConn, war: &ShadowWar) -> Result<Snapshot> {
    let payload =
        serde_json::to_string(war).context("Failed to serialize shadow war payload")?;
    let created_at = Utc::now();
    let sql = "INSERT INTO snapshots (created_at, payload) VALUES (?1, ?2) RETURNING id, created_at, payload";

    let record = conn
        .query_row(sql, params![created_at, payload], parse_snapshot_row)
        .context("Failed to insert snapshot")?;

    decode_record(record)
}

pub fn latest_snapshot(conn: &mut DbConn) -> Result<Option<Snapshot>> {
    let sql = "SELECT id, created_at, payload FROM snapshots ORDER BY created_at DESC, id DESC LIMIT 1";

    let record = conn
        .query_row(sql, [], parse_snapshot_row)
        .optional()
        .context("Failed to query latest snapshot")?;

    record.map(decode_record).transpose()
}

pub fn snapshot_by_date(conn: &mut DbConn, date: NaiveDate) -> Result<Option<Snapshot>> {
    let sql = "SELECT id, created_at, payload FROM snapshots WHERE date(created_at) = ?1 ORDER BY created_at DESC, id DESC LIMIT 1";

    let record = conn
        .query_row(sql, params![date.format("%Y-%m-%d").to_string()], parse_snapshot_row)
        .optional()
        .context("Failed to query snapshot by date")?;

    record.map(decode_record).transpose()
}

fn parse_snapshot_row(row: &rusqlite::Row) -> rusqlite::Result<SnapshotRecord> {
    Ok(SnapshotRecord {
        id: row.get(0)?,
        created_at: row.get(1)?,
        payload: row.get(2)?,
    })
}

fn decode_record(record: SnapshotRecord) -> Result<Snapshot> {
    let war: ShadowWar = serde_json::from_str(&record.payload)
        .with_context(|| format!("Failed to decode snapshot {} payload", record.id))?;

    Ok(Snapshot {
        id: record.id,
        created_at: record.created_at,
        war,
    })
}

/// SQLite-backed implementation of the snapshot repository
pub struct SqliteSnapshotRepository {
    pool: DbPool,
}

impl SqliteSnapshotRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(&self) -> Result<DbConn, RosterError> {
        get_connection(&self.pool).map_err(persistence_error)
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn save(&self, war: &ShadowWar) -> Result<Snapshot, RosterError> {
        let mut conn = self.connection()?;
        insert_snapshot(&mut conn, war).map_err(persistence_error)
    }

    fn latest(&self) -> Result<Option<Snapshot>, RosterError> {
        let mut conn = self.connection()?;
        latest_snapshot(&mut conn).map_err(persistence_error)
    }

    fn by_date(&self, date: NaiveDate) -> Result<Option<Snapshot>, RosterError> {
        let mut conn = self.connection()?;
        snapshot_by_date(&mut conn, date).map_err(persistence_error)
    }
}

fn persistence_error(err: anyhow::Error) -> RosterError {
    RosterError::Persistence(format!("{err:#}"))
}

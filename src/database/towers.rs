use anyhow::{Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension};

use crate::domain::{ContestInfo, Tower};

use super::connection::DbConn;

const TOWER_COLUMNS: &str = "id, name, buff, description, members, contest, created_at";

pub fn list_towers(conn: &mut DbConn) -> Result<Vec<Tower>> {
    let sql = format!(
        "SELECT {} FROM towers ORDER BY created_at DESC, id DESC",
        TOWER_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tower_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list towers")?;

    Ok(rows)
}

pub fn insert_tower(
    conn: &mut DbConn,
    name: &str,
    buff: &str,
    description: Option<&str>,
    members: &[String],
    contest: &ContestInfo,
) -> Result<Tower> {
    let members_json =
        serde_json::to_string(members).context("Failed to serialize tower members")?;
    let contest_json =
        serde_json::to_string(contest).context("Failed to serialize tower contest")?;
    let sql = format!(
        "INSERT INTO towers (name, buff, description, members, contest) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
        TOWER_COLUMNS
    );

    conn.query_row(
        &sql,
        params![name, buff, description, members_json, contest_json],
        parse_tower_row,
    )
    .context("Failed to insert tower")
}

/// Update the mutable columns; absent fields keep their stored values
pub fn update_tower(
    conn: &mut DbConn,
    id: i64,
    members: Option<&[String]>,
    contest: Option<&ContestInfo>,
) -> Result<Option<Tower>> {
    let members_json = members
        .map(serde_json::to_string)
        .transpose()
        .context("Failed to serialize tower members")?;
    let contest_json = contest
        .map(serde_json::to_string)
        .transpose()
        .context("Failed to serialize tower contest")?;
    let sql = format!(
        "UPDATE towers SET members = COALESCE(?1, members), contest = COALESCE(?2, contest) WHERE id = ?3 RETURNING {}",
        TOWER_COLUMNS
    );

    conn.query_row(&sql, params![members_json, contest_json, id], parse_tower_row)
        .optional()
        .context("Failed to update tower")
}

pub fn delete_tower(conn: &mut DbConn, id: i64) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM towers WHERE id = ?1", params![id])
        .context("Failed to delete tower")?;

    Ok(affected > 0)
}

fn parse_tower_row(row: &rusqlite::Row) -> rusqlite::Result<Tower> {
    let members_json: String = row.get(4)?;
    let contest_json: String = row.get(5)?;

    Ok(Tower {
        id: row.get(0)?,
        name: row.get(1)?,
        buff: row.get(2)?,
        description: row.get(3)?,
        members: decode_json_column(4, &members_json)?,
        contest: decode_json_column(5, &contest_json)?,
        created_at: row.get(6)?,
    })
}

fn decode_json_column<T: serde::de::DeserializeOwned>(
    index: usize,
    json: &str,
) -> rusqlite::Result<T> {
    serde_json::from_str(json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

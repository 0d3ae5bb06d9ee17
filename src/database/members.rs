use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::Member;

use super::connection::DbConn;

const MEMBER_COLUMNS: &str = "id, name, class, is_ready, created_at";

pub fn list_members(conn: &mut DbConn) -> Result<Vec<Member>> {
    let sql = format!("SELECT {} FROM members ORDER BY name ASC", MEMBER_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_member_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list members")?;

    Ok(rows)
}

/// Insert a member, or update the class when the name is already known.
/// Returns the stored row and whether it was newly inserted.
pub fn upsert_member(conn: &mut DbConn, name: &str, class: &str) -> Result<(Member, bool)> {
    if let Some(existing) = find_by_name(conn, name)? {
        let sql = format!(
            "UPDATE members SET class = ?1 WHERE id = ?2 RETURNING {}",
            MEMBER_COLUMNS
        );
        let updated = conn
            .query_row(&sql, params![class, existing.id], parse_member_row)
            .context("Failed to update member")?;
        return Ok((updated, false));
    }

    let sql = format!(
        "INSERT INTO members (name, class) VALUES (?1, ?2) RETURNING {}",
        MEMBER_COLUMNS
    );
    let inserted = conn
        .query_row(&sql, params![name, class], parse_member_row)
        .context("Failed to insert member")?;

    Ok((inserted, true))
}

pub fn set_member_ready(conn: &mut DbConn, id: i64, is_ready: bool) -> Result<Option<Member>> {
    let sql = format!(
        "UPDATE members SET is_ready = ?1 WHERE id = ?2 RETURNING {}",
        MEMBER_COLUMNS
    );

    conn.query_row(&sql, params![is_ready, id], parse_member_row)
        .optional()
        .context("Failed to update member ready status")
}

fn find_by_name(conn: &mut DbConn, name: &str) -> Result<Option<Member>> {
    let sql = format!("SELECT {} FROM members WHERE name = ?1", MEMBER_COLUMNS);

    conn.query_row(&sql, params![name], parse_member_row)
        .optional()
        .context("Failed to query member by name")
}

fn parse_member_row(row: &rusqlite::Row) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get(0)?,
        name: row.get(1)?,
        class: row.get(2)?,
        is_ready: row.get(3)?,
        created_at: row.get(4)?,
    })
}

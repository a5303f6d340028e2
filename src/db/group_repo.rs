use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::GiftResult;
use crate::model::{Group, Id, Participant};

pub fn insert(conn: &Connection, group: &Group) -> GiftResult<()> {
    conn.execute(
        "INSERT INTO groups (id, name, description, last_tossed_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            group.id,
            group.name,
            group.description,
            group.last_tossed_at.map(|t| t.to_rfc3339()),
        ],
    )?;

    for participant_id in &group.participant_ids {
        add_member(conn, group.id, *participant_id)?;
    }

    Ok(())
}

pub fn update(conn: &Connection, group: &Group) -> GiftResult<()> {
    conn.execute(
        "UPDATE groups SET name = ?1, description = ?2 WHERE id = ?3",
        params![group.name, group.description, group.id],
    )?;
    Ok(())
}

pub fn set_last_tossed_at(conn: &Connection, group_id: Id<Group>, at: DateTime<Utc>) -> GiftResult<()> {
    conn.execute(
        "UPDATE groups SET last_tossed_at = ?1 WHERE id = ?2",
        params![at.to_rfc3339(), group_id],
    )?;
    Ok(())
}

/// Adds a member. A participant already in the group keeps its position.
pub fn add_member(conn: &Connection, group_id: Id<Group>, participant_id: Id<Participant>) -> GiftResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO group_members (group_id, participant_id) VALUES (?1, ?2)",
        params![group_id, participant_id],
    )?;
    Ok(())
}

/// Removes a member. Returns false if the participant was not in the group.
pub fn remove_member(
    conn: &Connection,
    group_id: Id<Group>,
    participant_id: Id<Participant>,
) -> GiftResult<bool> {
    let removed = conn.execute(
        "DELETE FROM group_members WHERE group_id = ?1 AND participant_id = ?2",
        params![group_id, participant_id],
    )?;
    Ok(removed > 0)
}

pub fn is_member(conn: &Connection, group_id: Id<Group>, participant_id: Id<Participant>) -> GiftResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM group_members WHERE group_id = ?1 AND participant_id = ?2",
            params![group_id, participant_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Deletes the group and its membership rows. Participants are untouched.
pub fn delete(conn: &Connection, group_id: Id<Group>) -> GiftResult<()> {
    conn.execute(
        "DELETE FROM group_members WHERE group_id = ?1",
        params![group_id],
    )?;
    conn.execute("DELETE FROM groups WHERE id = ?1", params![group_id])?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: Id<Group>) -> GiftResult<Option<Group>> {
    let group = conn
        .query_row(
            "SELECT id, name, description, last_tossed_at FROM groups WHERE id = ?1",
            params![id],
            row_to_group,
        )
        .optional()?;

    match group {
        Some(mut group) => {
            group.participant_ids = find_member_ids(conn, group.id)?;
            Ok(Some(group))
        }
        None => Ok(None),
    }
}

/// All groups in creation order, without their members.
pub fn find_all(conn: &Connection) -> GiftResult<Vec<Group>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, last_tossed_at FROM groups ORDER BY rowid",
    )?;
    let groups = stmt
        .query_map([], row_to_group)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(groups)
}

pub fn find_by_name(conn: &Connection, name: &str) -> GiftResult<Vec<Group>> {
    let pattern = format!("%{}%", name.to_lowercase());
    let mut stmt = conn.prepare(
        "SELECT id, name, description, last_tossed_at FROM groups
         WHERE LOWER(name) LIKE ?1 ORDER BY rowid",
    )?;
    let groups = stmt
        .query_map(params![pattern], row_to_group)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(groups)
}

fn find_member_ids(conn: &Connection, group_id: Id<Group>) -> GiftResult<Vec<Id<Participant>>> {
    let mut stmt = conn.prepare(
        "SELECT participant_id FROM group_members WHERE group_id = ?1 ORDER BY seq",
    )?;
    let ids = stmt
        .query_map(params![group_id], |row| row.get::<_, Id<Participant>>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids)
}

fn row_to_group(row: &Row) -> rusqlite::Result<Group> {
    let tossed: Option<String> = row.get(3)?;
    let last_tossed_at = tossed
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))
        })
        .transpose()?;

    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        participant_ids: Vec::new(),
        last_tossed_at,
    })
}

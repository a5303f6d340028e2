use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::GiftResult;
use crate::model::{Group, Id, Participant};

const COLUMNS: &str = "p.id, p.name, p.wish, p.recipient_id";

pub fn insert(conn: &Connection, participant: &Participant) -> GiftResult<()> {
    conn.execute(
        "INSERT INTO participants (id, name, wish, recipient_id) VALUES (?1, ?2, ?3, ?4)",
        params![
            participant.id,
            participant.name,
            participant.wish,
            participant.recipient_id,
        ],
    )?;
    Ok(())
}

/// Writes name and wish. The recipient link is left alone: only
/// [`set_recipient`] and [`clear_references_to`] write it.
pub fn update(conn: &Connection, participant: &Participant) -> GiftResult<()> {
    conn.execute(
        "UPDATE participants SET name = ?1, wish = ?2 WHERE id = ?3",
        params![participant.name, participant.wish, participant.id],
    )?;
    Ok(())
}

/// Overwrite the recipient of one participant.
pub fn set_recipient(
    conn: &Connection,
    participant_id: Id<Participant>,
    recipient_id: Option<Id<Participant>>,
) -> GiftResult<()> {
    conn.execute(
        "UPDATE participants SET recipient_id = ?1 WHERE id = ?2",
        params![recipient_id, participant_id],
    )?;
    Ok(())
}

/// Null out every recipient link that points at `participant_id`.
/// Returns how many participants lost their recipient.
pub fn clear_references_to(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<usize> {
    let changed = conn.execute(
        "UPDATE participants SET recipient_id = NULL WHERE recipient_id = ?1",
        params![participant_id],
    )?;
    Ok(changed)
}

/// Delete a participant row along with its memberships. Recipient links
/// pointing at it are cleared first so no dangling reference survives.
/// Returns how many participants lost their recipient.
pub fn delete(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<usize> {
    let orphaned = clear_references_to(conn, participant_id)?;
    conn.execute(
        "DELETE FROM group_members WHERE participant_id = ?1",
        params![participant_id],
    )?;
    conn.execute(
        "DELETE FROM participants WHERE id = ?1",
        params![participant_id],
    )?;
    Ok(orphaned)
}

pub fn find_by_id(conn: &Connection, id: Id<Participant>) -> GiftResult<Option<Participant>> {
    let sql = format!("SELECT {COLUMNS} FROM participants p WHERE p.id = ?1");
    let participant = conn
        .query_row(&sql, params![id], row_to_participant)
        .optional()?;
    Ok(participant)
}

/// Members of a group in the order they joined it.
pub fn find_by_group(conn: &Connection, group_id: Id<Group>) -> GiftResult<Vec<Participant>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM participants p
         JOIN group_members m ON m.participant_id = p.id
         WHERE m.group_id = ?1
         ORDER BY m.seq"
    );
    let mut stmt = conn.prepare(&sql)?;
    let participants = stmt
        .query_map(params![group_id], row_to_participant)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(participants)
}

/// Participants whose recipient is `participant_id`.
pub fn find_givers_to(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<Vec<Participant>> {
    let sql = format!("SELECT {COLUMNS} FROM participants p WHERE p.recipient_id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let givers = stmt
        .query_map(params![participant_id], row_to_participant)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(givers)
}

fn row_to_participant(row: &Row) -> rusqlite::Result<Participant> {
    Ok(Participant {
        id: row.get(0)?,
        name: row.get(1)?,
        wish: row.get(2)?,
        recipient_id: row.get(3)?,
    })
}

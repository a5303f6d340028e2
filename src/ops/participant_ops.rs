use log::info;
use rusqlite::Connection;

use crate::db::{self, participant_repo};
use crate::error::{GiftError, GiftResult};
use crate::model::{Id, Participant};
use crate::validation;

pub fn create_participant(conn: &Connection, name: &str, wish: &str) -> GiftResult<Participant> {
    let participant = Participant::create(
        validation::bounded_text(name, "name")?,
        validation::bounded_text(wish, "wish")?,
    );
    participant_repo::insert(conn, &participant)?;
    Ok(participant)
}

pub fn update_participant(
    conn: &Connection,
    participant_id: Id<Participant>,
    name: Option<&str>,
    wish: Option<&str>,
) -> GiftResult<Participant> {
    let name = name.map(|n| validation::bounded_text(n, "name")).transpose()?;
    let wish = wish.map(|w| validation::bounded_text(w, "wish")).transpose()?;

    let tx = db::write_transaction(conn)?;
    let mut participant = find_participant(&tx, participant_id)?;
    if let Some(n) = name {
        participant.name = n;
    }
    if let Some(w) = wish {
        participant.wish = w;
    }
    participant_repo::update(&tx, &participant)?;
    tx.commit()?;

    Ok(participant)
}

/// Deletes a participant everywhere: its memberships, and any recipient
/// link pointing at it.
pub fn delete_participant(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<Participant> {
    let tx = db::write_transaction(conn)?;

    let participant = find_participant(&tx, participant_id)?;
    let orphaned = participant_repo::delete(&tx, participant_id)?;

    tx.commit()?;
    info!(
        "deleted participant {} ({}, {} recipient link(s) cleared)",
        participant.name, participant.id, orphaned
    );
    Ok(participant)
}

fn find_participant(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<Participant> {
    participant_repo::find_by_id(conn, participant_id)?
        .ok_or_else(|| GiftError::not_found("Participant", participant_id))
}

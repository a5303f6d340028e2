use log::info;
use rusqlite::Connection;

use crate::db::{self, group_repo, participant_repo};
use crate::error::{GiftError, GiftResult};
use crate::model::{Group, GroupDetail, Id, Participant};
use crate::validation;

pub fn create_group(conn: &Connection, name: &str, description: Option<&str>) -> GiftResult<Group> {
    let valid_name = validation::bounded_text(name, "name")?;
    let valid_description = validation::bounded_optional(description, "description")?;

    let group = Group::create(valid_name, valid_description);
    group_repo::insert(conn, &group)?;
    info!("created group {} ({})", group.name, group.id);
    Ok(group)
}

pub fn update_group(
    conn: &Connection,
    group_id: Id<Group>,
    name: &str,
    description: Option<&str>,
) -> GiftResult<Group> {
    let mut group = find_group(conn, group_id)?;

    group.name = validation::bounded_text(name, "name")?;
    group.description = validation::bounded_optional(description, "description")?;

    group_repo::update(conn, &group)?;
    Ok(group)
}

/// Deletes the group and its memberships, returning it as it was just
/// before. Its participants stay in the store.
pub fn delete_group(conn: &Connection, group_id: Id<Group>) -> GiftResult<GroupDetail> {
    let tx = db::write_transaction(conn)?;

    let group = find_group(&tx, group_id)?;
    let participants = participant_repo::find_by_group(&tx, group_id)?;
    group_repo::delete(&tx, group_id)?;

    tx.commit()?;
    info!("deleted group {} ({})", group.name, group.id);
    Ok(GroupDetail {
        summary: group.summary(),
        participants,
    })
}

pub fn add_participant(
    conn: &Connection,
    group_id: Id<Group>,
    participant_id: Id<Participant>,
) -> GiftResult<()> {
    find_group(conn, group_id)?;
    participant_repo::find_by_id(conn, participant_id)?
        .ok_or_else(|| GiftError::not_found("Participant", participant_id))?;

    group_repo::add_member(conn, group_id, participant_id)
}

/// Creates a participant and adds it to the group in one step. Nothing is
/// written when the group doesn't exist.
pub fn create_participant_in_group(
    conn: &Connection,
    group_id: Id<Group>,
    name: &str,
    wish: &str,
) -> GiftResult<Participant> {
    let participant = Participant::create(
        validation::bounded_text(name, "name")?,
        validation::bounded_text(wish, "wish")?,
    );

    let tx = db::write_transaction(conn)?;
    find_group(&tx, group_id)?;
    participant_repo::insert(&tx, &participant)?;
    group_repo::add_member(&tx, group_id, participant.id)?;
    tx.commit()?;

    Ok(participant)
}

/// Takes the participant out of the group and deletes it entirely. Anyone
/// who was gifting it is left without a recipient.
pub fn remove_participant(
    conn: &Connection,
    group_id: Id<Group>,
    participant_id: Id<Participant>,
) -> GiftResult<Participant> {
    let tx = db::write_transaction(conn)?;

    find_group(&tx, group_id)?;
    let participant = participant_repo::find_by_id(&tx, participant_id)?
        .ok_or_else(|| GiftError::not_found("Participant", participant_id))?;
    if !group_repo::remove_member(&tx, group_id, participant_id)? {
        return Err(GiftError::NotAMember {
            group_id: group_id.to_string(),
            participant_id: participant_id.to_string(),
        });
    }
    let orphaned = participant_repo::delete(&tx, participant_id)?;

    tx.commit()?;
    info!(
        "removed participant {} from group {} ({} recipient link(s) cleared)",
        participant.name, group_id, orphaned
    );
    Ok(participant)
}

fn find_group(conn: &Connection, group_id: Id<Group>) -> GiftResult<Group> {
    group_repo::find_by_id(conn, group_id)?
        .ok_or_else(|| GiftError::not_found("Group", group_id))
}

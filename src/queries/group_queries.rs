use rusqlite::Connection;

use crate::db::{group_repo, participant_repo};
use crate::error::{GiftError, GiftResult};
use crate::model::{Group, GroupDetail, GroupSummary, Id, Participant};

pub fn list_groups(conn: &Connection) -> GiftResult<Vec<GroupSummary>> {
    Ok(group_repo::find_all(conn)?
        .iter()
        .map(Group::summary)
        .collect())
}

pub fn get_group(conn: &Connection, group_id: Id<Group>) -> GiftResult<GroupDetail> {
    let group = group_repo::find_by_id(conn, group_id)?
        .ok_or_else(|| GiftError::not_found("Group", group_id))?;
    let participants = participant_repo::find_by_group(conn, group_id)?;
    Ok(GroupDetail {
        summary: group.summary(),
        participants,
    })
}

/// Members in the order they joined. Fails if the group doesn't exist, so an
/// empty result always means an empty group.
pub fn participants_of_group(conn: &Connection, group_id: Id<Group>) -> GiftResult<Vec<Participant>> {
    if group_repo::find_by_id(conn, group_id)?.is_none() {
        return Err(GiftError::not_found("Group", group_id));
    }
    participant_repo::find_by_group(conn, group_id)
}

pub fn get_participant(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<Participant> {
    participant_repo::find_by_id(conn, participant_id)?
        .ok_or_else(|| GiftError::not_found("Participant", participant_id))
}

/// Groups whose name contains `query`, case-insensitively.
pub fn find_groups_by_name(conn: &Connection, query: &str) -> GiftResult<Vec<GroupSummary>> {
    Ok(group_repo::find_by_name(conn, query.trim())?
        .iter()
        .map(Group::summary)
        .collect())
}

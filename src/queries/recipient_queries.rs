use rusqlite::Connection;

use crate::db::{group_repo, participant_repo};
use crate::error::{GiftError, GiftResult};
use crate::model::{Group, Id, Participant, Recipient};

/// Who `participant_id` gifts in `group_id`, per the latest toss.
///
/// Each way this can fail has its own error so callers can tell a missing
/// group from a participant that simply hasn't been assigned yet; all of
/// them report `is_not_found()`.
pub fn recipient_of(
    conn: &Connection,
    group_id: Id<Group>,
    participant_id: Id<Participant>,
) -> GiftResult<Recipient> {
    group_repo::find_by_id(conn, group_id)?
        .ok_or_else(|| GiftError::not_found("Group", group_id))?;
    let participant = participant_repo::find_by_id(conn, participant_id)?
        .ok_or_else(|| GiftError::not_found("Participant", participant_id))?;

    if !group_repo::is_member(conn, group_id, participant_id)? {
        return Err(GiftError::NotAMember {
            group_id: group_id.to_string(),
            participant_id: participant_id.to_string(),
        });
    }

    let no_recipient = || GiftError::NoRecipient {
        participant_id: participant_id.to_string(),
    };
    let recipient_id = participant.recipient_id.ok_or_else(no_recipient)?;
    // A link left by a toss of another group doesn't count here.
    if !group_repo::is_member(conn, group_id, recipient_id)? {
        return Err(no_recipient());
    }
    let recipient = participant_repo::find_by_id(conn, recipient_id)?.ok_or_else(no_recipient)?;

    Ok(Recipient::from(&recipient))
}

/// Participants who currently gift `participant_id`. After a toss this is
/// exactly one participant.
pub fn givers_to(conn: &Connection, participant_id: Id<Participant>) -> GiftResult<Vec<Participant>> {
    participant_repo::find_givers_to(conn, participant_id)
}

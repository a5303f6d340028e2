use std::collections::HashMap;

use chrono::Utc;
use log::{debug, info, warn};
use rand::Rng;
use rusqlite::Connection;

use crate::assignment::{self, MIN_PARTICIPANTS};
use crate::db::{self, group_repo, participant_repo};
use crate::error::{GiftError, GiftResult};
use crate::model::{Assignment, Group, Id, Participant, Recipient};

/// Draws a new assignment cycle for the group and stores it, replacing
/// whatever the previous toss left behind.
///
/// The whole read-shuffle-write sequence runs under one write transaction,
/// so concurrent tosses of the same group serialize and a failure part-way
/// leaves every recipient as it was. The result lists participants in the
/// order they joined the group.
pub fn toss<R: Rng + ?Sized>(
    conn: &Connection,
    group_id: Id<Group>,
    rng: &mut R,
) -> GiftResult<Vec<Assignment>> {
    let tx = db::write_transaction(conn)?;

    let group = group_repo::find_by_id(&tx, group_id)?
        .ok_or_else(|| GiftError::not_found("Group", group_id))?;
    let participants = participant_repo::find_by_group(&tx, group_id)?;

    if participants.len() < MIN_PARTICIPANTS {
        warn!(
            "toss rejected for group {}: {} participant(s)",
            group.name,
            participants.len()
        );
        return Err(GiftError::TooFewParticipants {
            group_id: group_id.to_string(),
            count: participants.len(),
            required: MIN_PARTICIPANTS,
        });
    }

    let ids: Vec<Id<Participant>> = participants.iter().map(|p| p.id).collect();
    let pairs = assignment::cycle_of(&assignment::shuffled(&ids, rng));
    if !assignment::verify_single_cycle(&pairs) {
        return Err(GiftError::Integrity(format!(
            "toss of group {} did not produce a single cycle",
            group_id
        )));
    }

    for (giver, recipient) in &pairs {
        participant_repo::set_recipient(&tx, *giver, Some(*recipient))?;
        debug!("{} -> {}", giver, recipient);
    }
    group_repo::set_last_tossed_at(&tx, group_id, Utc::now())?;

    let assignments = assignments_of(&participant_repo::find_by_group(&tx, group_id)?)?;
    tx.commit()?;

    info!(
        "tossed group {} ({} participants)",
        group.name,
        assignments.len()
    );
    Ok(assignments)
}

/// Pairs each participant with its recipient. Every recipient must be one of
/// `participants`, which holds right after a toss.
fn assignments_of(participants: &[Participant]) -> GiftResult<Vec<Assignment>> {
    let by_id: HashMap<Id<Participant>, &Participant> =
        participants.iter().map(|p| (p.id, p)).collect();

    participants
        .iter()
        .map(|p| {
            let recipient = p
                .recipient_id
                .and_then(|id| by_id.get(&id))
                .ok_or_else(|| {
                    GiftError::Integrity(format!("participant {} has no recipient after toss", p.id))
                })?;
            Ok(Assignment {
                participant: p.clone(),
                recipient: Recipient::from(*recipient),
            })
        })
        .collect()
}

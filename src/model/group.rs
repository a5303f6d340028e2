use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::participant::Participant;

/// A named gift exchange. Holds its participants by membership only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Id<Group>,
    pub name: String,
    pub description: Option<String>,
    pub participant_ids: Vec<Id<Participant>>,
    pub last_tossed_at: Option<DateTime<Utc>>,
}

impl Group {
    pub fn create(name: String, description: Option<String>) -> Self {
        Self {
            id: Id::generate(),
            name,
            description,
            participant_ids: Vec::new(),
            last_tossed_at: None,
        }
    }

    pub fn has_member(&self, participant_id: Id<Participant>) -> bool {
        self.participant_ids.contains(&participant_id)
    }

    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            last_tossed_at: self.last_tossed_at,
        }
    }
}

/// List view of a group, without participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: Id<Group>,
    pub name: String,
    pub description: Option<String>,
    pub last_tossed_at: Option<DateTime<Utc>>,
}

/// A group with its participants loaded, as returned by a full group view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetail {
    #[serde(flatten)]
    pub summary: GroupSummary,
    pub participants: Vec<Participant>,
}

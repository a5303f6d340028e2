use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Someone who gives one gift and receives one gift per toss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Id<Participant>,
    pub name: String,
    pub wish: String,
    /// Who this participant gifts, per the most recent toss.
    pub recipient_id: Option<Id<Participant>>,
}

impl Participant {
    pub fn create(name: String, wish: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            wish,
            recipient_id: None,
        }
    }
}

/// The public face of an assigned recipient. Its own recipient is left out
/// so a lookup never reveals more than one link of the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: Id<Participant>,
    pub name: String,
    pub wish: String,
}

impl From<&Participant> for Recipient {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            wish: p.wish.clone(),
        }
    }
}

/// One link of a toss: `participant` gifts `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub participant: Participant,
    pub recipient: Recipient,
}

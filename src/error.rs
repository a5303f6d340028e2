use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiftError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} cannot be longer than {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Participant {participant_id} is not a member of group {group_id}")]
    NotAMember {
        group_id: String,
        participant_id: String,
    },

    #[error("Participant {participant_id} has no recipient yet")]
    NoRecipient { participant_id: String },

    #[error("Group {group_id} has {count} participants, a toss needs at least {required}")]
    TooFewParticipants {
        group_id: String,
        count: usize,
        required: usize,
    },

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GiftError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        GiftError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// True for every error a client sees as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GiftError::NotFound { .. } | GiftError::NotAMember { .. } | GiftError::NoRecipient { .. }
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, GiftError::TooFewParticipants { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GiftError::BlankField { .. } | GiftError::TooLong { .. })
    }
}

pub type GiftResult<T> = Result<T, GiftError>;

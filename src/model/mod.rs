pub mod ids;
pub mod participant;
pub mod group;

// Re-exports for convenience
pub use ids::Id;
pub use participant::{Assignment, Participant, Recipient};
pub use group::{Group, GroupDetail, GroupSummary};

pub mod group_ops;
pub mod participant_ops;
pub mod toss_ops;

pub mod group_queries;
pub mod recipient_queries;

pub mod schema;
pub mod group_repo;
pub mod participant_repo;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::GiftResult;

/// Begin a transaction that holds the database write lock from its first
/// statement until commit. Dropping it without committing rolls back.
pub fn write_transaction(conn: &Connection) -> GiftResult<Transaction<'_>> {
    Ok(Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?)
}

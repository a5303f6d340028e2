use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::GiftResult;

/// How long a connection waits on another writer before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> GiftResult<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS groups (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL CHECK (length(trim(name)) > 0),
            description TEXT,
            last_tossed_at TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS participants (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL CHECK (length(trim(name)) > 0),
            wish TEXT NOT NULL,
            recipient_id TEXT REFERENCES participants(id) ON DELETE SET NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            CHECK (recipient_id IS NULL OR recipient_id <> id)
        );

        CREATE TABLE IF NOT EXISTS group_members (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            group_id TEXT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            participant_id TEXT NOT NULL REFERENCES participants(id) ON DELETE CASCADE,
            UNIQUE (group_id, participant_id)
        );

        CREATE INDEX IF NOT EXISTS idx_participants_recipient ON participants(recipient_id);
        CREATE INDEX IF NOT EXISTS idx_group_members_participant ON group_members(participant_id);
        ",
    )?;
    Ok(())
}

/// Open a file-backed database, ready for use. Each thread or task is
/// expected to open its own connection.
pub fn open(path: &Path) -> GiftResult<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}

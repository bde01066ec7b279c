use crate::structs::SavedLink;
use rusqlite::{Connection, OptionalExtension, Result};

#[inline(always)]
pub fn get_version(conn: &Connection) -> Result<u32> {
    conn.query_row("SELECT user_version FROM pragma_user_version;", [], |row| {
        row.get(0)
    })
}

#[inline(always)]
pub fn set_version(conn: &Connection, version: u32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// SQLite integers are signed, owners are stored as the bit pattern of their
/// u64 id. Ids up to i64::MAX keep their numeric value.
#[inline(always)]
pub const fn owner_key(owner: u64) -> i64 {
    owner as i64
}

#[inline(always)]
pub const fn owner_from_key(key: i64) -> u64 {
    key as u64
}

#[inline(always)]
pub fn count_links(conn: &Connection, owner: u64) -> Result<u64> {
    conn.query_row(
        "SELECT COUNT(*) FROM articles WHERE user_id=(?1)",
        [owner_key(owner)],
        |row| row.get(0),
    )
}

/// Returns the link at position `offset` among the owner's links ordered by id.
/// The ordering only has to be stable for the duration of the enclosing
/// transaction.
#[inline(always)]
pub fn get_link_at(conn: &Connection, owner: u64, offset: u64) -> Result<Option<SavedLink>> {
    conn.query_row(
        "SELECT id, user_id, url FROM articles
        WHERE user_id=(?1)
        ORDER BY id
        LIMIT 1 OFFSET (?2)",
        (owner_key(owner), offset),
        |row| {
            Ok(SavedLink::new(
                row.get(0)?, // id
                owner_from_key(row.get(1)?), // user_id
                row.get(2)?, // url
            ))
        },
    )
    .optional()
}

use crate::connections::GetConnection;
use crate::errors::{Error, Result};
use crate::queries::owner_key;
use crate::structs::{AddOutcome, RemoveOutcome};
use crate::LinkReader;

use log::debug;

pub trait LinkWriter: LinkReader {
    /// Saves `url` for `owner`. The unique constraint on (user_id, url) decides
    /// the outcome, so concurrent adds of the same pair store exactly one row.
    #[inline]
    fn add_link(&self, owner: u64, url: &str) -> Result<AddOutcome> {
        if url.trim().is_empty() {
            return Err(Error::EmptyUrl);
        }

        let changed = self.with_connection(|conn| {
            Ok(conn.execute(
                "INSERT INTO articles (user_id, url) VALUES (?1, ?2)
                ON CONFLICT(user_id, url) DO NOTHING",
                (owner_key(owner), url),
            )?)
        })?;

        if changed > 0 {
            debug!("saved {url:?} for owner {owner}");
            Ok(AddOutcome::Added)
        } else {
            debug!("{url:?} already saved for owner {owner}");
            Ok(AddOutcome::AlreadyExists)
        }
    }

    /// Deletes the link only if it belongs to `owner`.
    #[inline]
    fn remove_link(&self, id: i64, owner: u64) -> Result<RemoveOutcome> {
        let changed = self.with_connection(|conn| {
            Ok(conn.execute(
                "DELETE FROM articles WHERE id=(?1) AND user_id=(?2)",
                (id, owner_key(owner)),
            )?)
        })?;

        if changed > 0 {
            debug!("removed link {id} for owner {owner}");
            Ok(RemoveOutcome::Removed)
        } else {
            Ok(RemoveOutcome::NotFound)
        }
    }
}
